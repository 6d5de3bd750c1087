use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAllBookingsResponse {
    #[schema(example = 42)]
    pub deleted: u64,
}

/// Delete every booking (admin)
#[utoipa::path(
    delete,
    path = "/api/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "Bookings deleted", body = inline(SuccessResponse<DeleteAllBookingsResponse>)),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/bookings")]
pub async fn delete_all_bookings_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.booking.delete_all.execute().await {
        Ok(deleted) => {
            info!(admin_id = %admin.user_id, deleted, "All bookings deleted");
            ApiResponse::success(DeleteAllBookingsResponse { deleted })
        }
        Err(e) => {
            error!("Failed to delete bookings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
