use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::booking::adapter::incoming::web::routes::BookingResponse;
use crate::modules::booking::application::ports::incoming::use_cases::{
    UpdateBookingStatusCommand, UpdateBookingStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateBookingStatusRequest {
    /// Only "pending" and "cancelled" are accepted
    #[schema(example = "cancelled")]
    pub status: String,
}

/// Update booking status
///
/// The booker or the property's agent may move a booking to `pending` or `cancelled`.
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}",
    tag = "bookings",
    params(("booking_id" = Uuid, Path, description = "Booking id")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = inline(SuccessResponse<BookingResponse>)),
        (
            status = 400,
            description = "Status not assignable, or re-activation overlaps another booking",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_STATUS",
                    "message": "Status must be one of: pending, cancelled"
                }
            })
        ),
        (status = 403, description = "Neither booker nor agent", body = ErrorResponse),
        (status = 404, description = "Booking or property not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/bookings/{booking_id}")]
pub async fn update_booking_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBookingStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let booking_id = path.into_inner();

    let command = UpdateBookingStatusCommand {
        booking_id,
        status: req.into_inner().status,
        actor: user.user_id,
    };

    match data.booking.update_status.execute(command).await {
        Ok(booking) => {
            info!(%booking_id, status = %booking.status, "Booking status updated");
            ApiResponse::success(BookingResponse::from(booking))
        }

        Err(UpdateBookingStatusError::InvalidStatus(_)) => ApiResponse::bad_request(
            "INVALID_STATUS",
            "Status must be one of: pending, cancelled",
        ),

        Err(UpdateBookingStatusError::BookingNotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Booking not found")
        }

        Err(UpdateBookingStatusError::PropertyNotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }

        Err(UpdateBookingStatusError::Forbidden) => {
            warn!(%booking_id, user_id = %user.user_id, "Status update denied");
            ApiResponse::forbidden("FORBIDDEN", "Not authorized to update this booking")
        }

        Err(UpdateBookingStatusError::Conflict(msg)) => {
            ApiResponse::bad_request("BOOKING_CONFLICT", &msg)
        }

        Err(UpdateBookingStatusError::RepositoryError(e)) => {
            error!("Repository error updating booking status: {}", e);
            ApiResponse::internal_error()
        }
    }
}
