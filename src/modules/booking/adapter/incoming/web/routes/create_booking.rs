use actix_web::{post, web, Responder};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::booking::adapter::incoming::web::routes::BookingResponse;
use crate::modules::booking::application::domain::entities::BookingType;
use crate::modules::booking::application::ports::incoming::use_cases::{
    CreateBookingCommand, CreateBookingError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Property to book
    #[schema(example = "7d4c2a9e-1b3f-4e8a-a0c2-5f6e7d8c9b0a")]
    pub property: Uuid,

    #[serde(rename = "type")]
    pub booking_type: BookingType,

    /// Required for rent, forbidden for sale. A date-time is cut to its UTC day.
    #[serde(default, deserialize_with = "calendar_day")]
    #[schema(example = "2025-06-01")]
    pub start_date: Option<NaiveDate>,

    /// Inclusive; required for rent, forbidden for sale
    #[serde(default, deserialize_with = "calendar_day")]
    #[schema(example = "2025-06-10")]
    pub end_date: Option<NaiveDate>,

    #[schema(example = 1200.0)]
    pub booked_price: f64,
}

/// Accepts `2025-06-01`, `2025-06-01T09:30:00Z` (any RFC 3339 offset) or
/// `2025-06-01T09:30:00`.
fn calendar_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(instant.with_timezone(&Utc).date_naive()));
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(local.date()));
    }

    Err(serde::de::Error::custom(format!("invalid date: {raw}")))
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a booking
///
/// Books a property for the authenticated user. Rent bookings may not overlap an
/// active rent booking of the same property; a property takes at most one sale booking.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = inline(SuccessResponse<BookingResponse>)),
        (
            status = 400,
            description = "Invalid input or booking conflict",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "BOOKING_CONFLICT",
                    "message": "Property already booked in this period"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/bookings")]
pub async fn create_booking_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBookingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = CreateBookingCommand {
        property_id: req.property,
        user: user.user_id,
        booking_type: req.booking_type,
        start_date: req.start_date,
        end_date: req.end_date,
        booked_price: req.booked_price,
    };

    match data.booking.create.execute(command).await {
        Ok(booking) => {
            info!(
                booking_id = %booking.id,
                property_id = %booking.property_id,
                user_id = %booking.user,
                "Booking created"
            );
            ApiResponse::created(BookingResponse::from(booking))
        }

        Err(CreateBookingError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateBookingError::PropertyNotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }

        Err(CreateBookingError::Conflict(msg)) => {
            warn!(property_id = %req.property, "Booking conflict: {}", msg);
            ApiResponse::bad_request("BOOKING_CONFLICT", &msg)
        }

        Err(CreateBookingError::RepositoryError(e)) => {
            error!("Repository error creating booking: {}", e);
            ApiResponse::internal_error()
        }
    }
}
