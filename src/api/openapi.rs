use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Bookings
use crate::modules::booking::adapter::incoming::web::routes::{
    BookingResponse, CreateBookingRequest, DeleteAllBookingsResponse, UpdateBookingStatusRequest,
};
use crate::modules::booking::application::domain::entities::{
    BookingStats, BookingStatus, BookingType, MonthlyStat, StatusStat,
};

// Properties
use crate::modules::property::adapter::incoming::web::routes::AgentBookingResponse;
use crate::modules::property::application::domain::entities::{
    Property, PropertyImage, PropertyLocation, PropertyType,
};
use crate::modules::property::application::ports::outgoing::BookerView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Estate Booking API",
        version = "1.0.0",
        description = "Bookings, availability and likes for property listings",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Booking endpoints
        crate::modules::booking::adapter::incoming::web::routes::create_booking_handler,
        crate::modules::booking::adapter::incoming::web::routes::update_booking_status_handler,
        crate::modules::booking::adapter::incoming::web::routes::get_booking_handler,
        crate::modules::booking::adapter::incoming::web::routes::get_my_bookings_handler,
        crate::modules::booking::adapter::incoming::web::routes::list_bookings_handler,
        crate::modules::booking::adapter::incoming::web::routes::get_booking_stats_handler,
        crate::modules::booking::adapter::incoming::web::routes::delete_all_bookings_handler,

        // Property endpoints
        crate::modules::property::adapter::incoming::web::routes::get_available_properties_handler,
        crate::modules::property::adapter::incoming::web::routes::get_agent_bookings_handler,
        crate::modules::property::adapter::incoming::web::routes::accept_sale_handler,
        crate::modules::property::adapter::incoming::web::routes::toggle_like_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Booking DTOs
            BookingResponse,
            CreateBookingRequest,
            UpdateBookingStatusRequest,
            DeleteAllBookingsResponse,
            BookingType,
            BookingStatus,
            BookingStats,
            StatusStat,
            MonthlyStat,

            // Property DTOs
            Property,
            PropertyType,
            PropertyLocation,
            PropertyImage,
            AgentBookingResponse,
            BookerView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "bookings", description = "Rent and sale booking endpoints"),
        (name = "properties", description = "Property availability, likes and sale acceptance"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
