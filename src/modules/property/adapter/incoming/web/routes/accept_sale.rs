use actix_web::{post, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::property::application::domain::entities::Property;
use crate::modules::property::application::ports::incoming::use_cases::AcceptSaleError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Accept a sale booking
///
/// The property's agent accepts the sale booking `booking_id`, marking the property as
/// purchased. The booking keeps its status.
#[utoipa::path(
    post,
    path = "/api/properties/{booking_id}/accept",
    tag = "properties",
    params(("booking_id" = Uuid, Path, description = "Sale booking id")),
    responses(
        (status = 200, description = "Property marked as purchased", body = inline(SuccessResponse<Property>)),
        (
            status = 400,
            description = "Booking is not a sale booking",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "BOOKING_NOT_SALE",
                    "message": "Only sale bookings can be accepted"
                }
            })
        ),
        (status = 403, description = "Caller is not the property's agent", body = ErrorResponse),
        (status = 404, description = "Booking or property not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/properties/{booking_id}/accept")]
pub async fn accept_sale_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let booking_id = path.into_inner();

    match data
        .property
        .accept_sale
        .execute(booking_id, user.user_id)
        .await
    {
        Ok(property) => {
            info!(%booking_id, property_id = %property.id, "Sale accepted");
            ApiResponse::success(property)
        }

        Err(AcceptSaleError::BookingNotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Booking not found")
        }

        Err(AcceptSaleError::PropertyNotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }

        Err(AcceptSaleError::NotSaleBooking) => {
            ApiResponse::bad_request("BOOKING_NOT_SALE", "Only sale bookings can be accepted")
        }

        Err(AcceptSaleError::Forbidden) => {
            warn!(%booking_id, user_id = %user.user_id, "Sale acceptance denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the property's agent can accept a sale")
        }

        Err(AcceptSaleError::RepositoryError(e)) => {
            error!("Repository error accepting sale {}: {}", booking_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::property::application::service::AcceptSaleService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::booking_fixtures::sample_sale_booking;
    use crate::tests::support::property_fixtures::{sample_property, InMemoryPropertyStore};
    use crate::tests::support::stubs::StubAcceptSaleUseCase;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .app_data(web::Data::new(test_token_provider()))
                    .service(accept_sale_handler),
            )
            .await
        };
    }

    fn accept(booking_id: Uuid, actor: Uuid) -> test::TestRequest {
        test::TestRequest::post()
            .uri(&format!("/api/properties/{}/accept", booking_id))
            .insert_header(bearer(actor, false))
    }

    #[actix_web::test]
    async fn test_agent_accepts_sale() {
        let agent = UserId::from(Uuid::new_v4());
        let property = sample_property(agent);
        let mut booking = sample_sale_booking();
        booking.property_id = property.id;

        let store = InMemoryPropertyStore::default();
        store.add_property(property.clone());
        store.add_booking(booking.clone());

        let app = app!(TestAppStateBuilder::default()
            .with_accept_sale(AcceptSaleService::new(store.clone(), store.clone()))
            .build());

        let resp = test::call_service(&app, accept(booking.id, agent.value()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], json!(property.id));
        assert_eq!(body["data"]["isPurchased"], true);
        assert!(store.property(property.id).unwrap().is_purchased);
    }

    #[actix_web::test]
    async fn test_error_mapping() {
        let cases = [
            (AcceptSaleError::BookingNotFound, StatusCode::NOT_FOUND, "BOOKING_NOT_FOUND"),
            (AcceptSaleError::PropertyNotFound, StatusCode::NOT_FOUND, "PROPERTY_NOT_FOUND"),
            (AcceptSaleError::NotSaleBooking, StatusCode::BAD_REQUEST, "BOOKING_NOT_SALE"),
            (AcceptSaleError::Forbidden, StatusCode::FORBIDDEN, "FORBIDDEN"),
            (
                AcceptSaleError::RepositoryError("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];

        for (err, status, code) in cases {
            let app = app!(TestAppStateBuilder::default()
                .with_accept_sale(StubAcceptSaleUseCase::error(err))
                .build());

            let resp =
                test::call_service(&app, accept(Uuid::new_v4(), Uuid::new_v4()).to_request())
                    .await;
            assert_eq!(resp.status(), status);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], code);
        }
    }
}
