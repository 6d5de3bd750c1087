use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::property::application::domain::entities::Property;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Available properties
///
/// Listed for sale or rent and not held by any pending, confirmed or completed
/// booking, whatever its dates. Newest first.
#[utoipa::path(
    get,
    path = "/api/properties/available",
    tag = "properties",
    responses(
        (status = 200, description = "Available properties", body = inline(SuccessResponse<Vec<Property>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/properties/available")]
pub async fn get_available_properties_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.get_available.execute().await {
        Ok(properties) => ApiResponse::success(properties),
        Err(e) => {
            error!("Failed to list available properties: {}", e);
            ApiResponse::internal_error()
        }
    }
}
