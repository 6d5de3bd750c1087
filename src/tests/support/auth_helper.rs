use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "estate-booking-test".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(jwt_service())
}

pub fn token(user_id: Uuid, is_admin: bool) -> String {
    jwt_service()
        .generate_access_token(user_id, is_admin)
        .unwrap()
}

/// `Authorization` header carrying a freshly signed access token.
pub fn bearer(user_id: Uuid, is_admin: bool) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token(user_id, is_admin)))
}
