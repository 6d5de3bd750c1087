use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::booking::adapter::incoming::web::routes::BookingResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's bookings, newest first
#[utoipa::path(
    get,
    path = "/api/bookings/my",
    tag = "bookings",
    responses(
        (status = 200, description = "Bookings", body = inline(SuccessResponse<Vec<BookingResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/bookings/my")]
pub async fn get_my_bookings_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.booking.get_mine.execute(user.user_id).await {
        Ok(bookings) => ApiResponse::success(
            bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(user_id = %user.user_id, "Failed to list user bookings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
