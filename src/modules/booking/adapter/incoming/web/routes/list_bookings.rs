use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::booking::adapter::incoming::web::routes::BookingResponse;
use crate::modules::booking::application::ports::incoming::use_cases::ListBookingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsQuery {
    /// 1-based page of 10 bookings; omitted or 0 returns everything
    pub page_num: Option<u64>,
}

/// List all bookings (admin)
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "bookings",
    params(ListBookingsQuery),
    responses(
        (status = 200, description = "Bookings, newest first", body = inline(SuccessResponse<Vec<BookingResponse>>)),
        (status = 400, description = "pageNum is not a number or is out of range", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/bookings")]
pub async fn list_bookings_handler(
    _admin: AdminUser,
    query: web::Query<ListBookingsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.booking.list_all.execute(query.page_num).await {
        Ok(bookings) => ApiResponse::success(
            bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListBookingsError::InvalidPage(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(e) => {
            error!("Failed to list bookings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
