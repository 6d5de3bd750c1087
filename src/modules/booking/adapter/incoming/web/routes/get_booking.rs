use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::booking::adapter::incoming::web::routes::BookingResponse;
use crate::modules::booking::application::ports::incoming::use_cases::GetBookingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a booking
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = "bookings",
    params(("booking_id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking", body = inline(SuccessResponse<BookingResponse>)),
        (status = 403, description = "Not the booker, the agent or an admin", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/bookings/{booking_id}")]
pub async fn get_booking_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let booking_id = path.into_inner();

    match data
        .booking
        .get_single
        .execute(booking_id, user.user_id, user.is_admin)
        .await
    {
        Ok(booking) => ApiResponse::success(BookingResponse::from(booking)),

        Err(GetBookingError::NotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Booking not found")
        }

        Err(GetBookingError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not authorized to view this booking")
        }

        Err(GetBookingError::RepositoryError(e)) => {
            error!("Repository error fetching booking {}: {}", booking_id, e);
            ApiResponse::internal_error()
        }
    }
}
