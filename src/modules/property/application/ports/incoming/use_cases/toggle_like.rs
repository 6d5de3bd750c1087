use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::property::application::domain::entities::Property;

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleLikeError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for ToggleLikeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleLikeError::NotFound => write!(f, "property not found"),
            ToggleLikeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    async fn execute(&self, property_id: Uuid, user: UserId) -> Result<Property, ToggleLikeError>;
}
