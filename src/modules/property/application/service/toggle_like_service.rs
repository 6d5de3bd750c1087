use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::property::application::domain::entities::Property;
use crate::modules::property::application::ports::incoming::use_cases::{
    ToggleLikeError, ToggleLikeUseCase,
};
use crate::modules::property::application::ports::outgoing::{
    PropertyRepository, PropertyRepositoryError,
};

pub struct ToggleLikeService<R>
where
    R: PropertyRepository,
{
    property_repository: R,
}

impl<R> ToggleLikeService<R>
where
    R: PropertyRepository,
{
    pub fn new(property_repository: R) -> Self {
        Self {
            property_repository,
        }
    }
}

#[async_trait]
impl<R> ToggleLikeUseCase for ToggleLikeService<R>
where
    R: PropertyRepository + Send + Sync,
{
    async fn execute(&self, property_id: Uuid, user: UserId) -> Result<Property, ToggleLikeError> {
        self.property_repository
            .toggle_like(property_id, user)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => ToggleLikeError::NotFound,
                PropertyRepositoryError::DatabaseError(msg) => {
                    ToggleLikeError::RepositoryError(msg)
                }
            })
    }
}
