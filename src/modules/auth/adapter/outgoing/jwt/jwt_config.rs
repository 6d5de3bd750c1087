use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256 algorithm")]
    SecretTooShort,

    #[error("Invalid JWT_ACCESS_EXPIRY value: {0}")]
    InvalidExpiry(String),
}

impl JwtConfig {
    pub const DEFAULT_ISSUER: &'static str = "estate-booking";
    const DEFAULT_ACCESS_EXPIRY: &'static str = "1800";

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").ok();
        let expiry = env::var("JWT_ACCESS_EXPIRY").ok();

        Self::from_values(secret_key, issuer, expiry)
    }

    pub fn from_values(
        secret_key: String,
        issuer: Option<String>,
        access_expiry: Option<String>,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }

        let raw_expiry = access_expiry.unwrap_or_else(|| Self::DEFAULT_ACCESS_EXPIRY.to_string());
        let access_token_expiry = raw_expiry
            .parse::<i64>()
            .map_err(|_| JwtConfigError::InvalidExpiry(raw_expiry.clone()))?;

        // 1 second .. 24 hours
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(JwtConfigError::InvalidExpiry(raw_expiry));
        }

        let issuer = issuer
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
