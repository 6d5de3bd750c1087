use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::booking::adapter::incoming::web::routes::BookingResponse;
use crate::modules::property::application::ports::incoming::use_cases::GetAgentBookingsError;
use crate::modules::property::application::ports::outgoing::{AgentBookingView, BookerView};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentBookingResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,

    #[schema(example = "Seaside apartment")]
    pub property_title: String,

    /// Contact details of the booker, when the user record exists
    pub booker: Option<BookerView>,
}

impl From<AgentBookingView> for AgentBookingResponse {
    fn from(view: AgentBookingView) -> Self {
        Self {
            booking: BookingResponse::from(view.booking),
            property_title: view.property_title,
            booker: view.booker,
        }
    }
}

/// Bookings on the caller's properties
#[utoipa::path(
    get,
    path = "/api/properties/my-bookings",
    tag = "properties",
    responses(
        (status = 200, description = "Bookings, newest first", body = inline(SuccessResponse<Vec<AgentBookingResponse>>)),
        (
            status = 404,
            description = "Caller has no properties, or no bookings on them",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "NO_PROPERTIES",
                    "message": "You have no properties yet"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/properties/my-bookings")]
pub async fn get_agent_bookings_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.get_agent_bookings.execute(user.user_id).await {
        Ok(views) => ApiResponse::success(
            views
                .into_iter()
                .map(AgentBookingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e @ GetAgentBookingsError::NoProperties) => {
            ApiResponse::not_found("NO_PROPERTIES", &e.to_string())
        }
        Err(e @ GetAgentBookingsError::NoBookings) => {
            ApiResponse::not_found("NO_BOOKINGS", &e.to_string())
        }
        Err(GetAgentBookingsError::RepositoryError(e)) => {
            error!(agent_id = %user.user_id, "Failed to list agent bookings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
