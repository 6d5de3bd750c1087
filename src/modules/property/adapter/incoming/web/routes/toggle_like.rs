use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::property::application::domain::entities::Property;
use crate::modules::property::application::ports::incoming::use_cases::ToggleLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Like or unlike a property
#[utoipa::path(
    put,
    path = "/api/properties/{property_id}/like",
    tag = "properties",
    params(("property_id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property with updated likes", body = inline(SuccessResponse<Property>)),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/properties/{property_id}/like")]
pub async fn toggle_like_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let property_id = path.into_inner();

    match data
        .property
        .toggle_like
        .execute(property_id, user.user_id)
        .await
    {
        Ok(property) => ApiResponse::success(property),
        Err(ToggleLikeError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }
        Err(ToggleLikeError::RepositoryError(e)) => {
            error!("Repository error toggling like on {}: {}", property_id, e);
            ApiResponse::internal_error()
        }
    }
}
