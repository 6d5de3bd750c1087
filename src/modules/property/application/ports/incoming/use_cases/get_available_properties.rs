use async_trait::async_trait;
use std::fmt;

use crate::modules::property::application::domain::entities::Property;

#[derive(Debug, Clone, PartialEq)]
pub enum GetAvailablePropertiesError {
    RepositoryError(String),
}

impl fmt::Display for GetAvailablePropertiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetAvailablePropertiesError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetAvailablePropertiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Property>, GetAvailablePropertiesError>;
}
