use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Invalid token issuer")]
    InvalidIssuer,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,          // User ID
    pub iss: String,        // Issuer
    pub exp: i64,           // Expiration timestamp
    pub iat: i64,           // Issued at timestamp
    pub nbf: i64,           // Not before timestamp
    pub token_type: String, // only "access" is accepted by the extractors
    pub is_admin: bool,
}

/// Tokens are issued by the identity service; this service only verifies them.
/// `generate_access_token` exists for tooling and tests.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, is_admin: bool) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
