use async_trait::async_trait;

use crate::modules::property::application::domain::entities::Property;
use crate::modules::property::application::ports::incoming::use_cases::{
    GetAvailablePropertiesError, GetAvailablePropertiesUseCase,
};
use crate::modules::property::application::ports::outgoing::PropertyQuery;

pub struct GetAvailablePropertiesService<Q>
where
    Q: PropertyQuery,
{
    property_query: Q,
}

impl<Q> GetAvailablePropertiesService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(property_query: Q) -> Self {
        Self { property_query }
    }
}

#[async_trait]
impl<Q> GetAvailablePropertiesUseCase for GetAvailablePropertiesService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Property>, GetAvailablePropertiesError> {
        self.property_query
            .list_available()
            .await
            .map_err(|e| GetAvailablePropertiesError::RepositoryError(e.to_string()))
    }
}
