use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::booking::application::domain::entities::BookingStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Booking statistics (admin)
///
/// Counts and summed booked price per status, and booking counts per creation month.
#[utoipa::path(
    get,
    path = "/api/bookings/stats",
    tag = "bookings",
    responses(
        (
            status = 200,
            description = "Statistics",
            body = inline(SuccessResponse<BookingStats>),
            example = json!({
                "success": true,
                "data": {
                    "byStatus": [
                        { "status": "pending", "totalBookings": 2, "totalAmount": 150.0 }
                    ],
                    "byMonth": [
                        { "year": 2025, "month": 6, "totalBookings": 2 }
                    ]
                }
            })
        ),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/bookings/stats")]
pub async fn get_booking_stats_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.booking.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!("Failed to compute booking stats: {}", e);
            ApiResponse::internal_error()
        }
    }
}
