use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::property::application::domain::entities::Property;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyRepositoryError {
    #[error("Property not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn mark_purchased(&self, property_id: Uuid) -> Result<Property, PropertyRepositoryError>;

    /// Adds `user` to the property's likes, or removes them if already present.
    async fn toggle_like(
        &self,
        property_id: Uuid,
        user: UserId,
    ) -> Result<Property, PropertyRepositoryError>;
}
