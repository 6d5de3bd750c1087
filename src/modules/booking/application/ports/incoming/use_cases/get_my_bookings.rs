use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::Booking;

#[derive(Debug, Clone, PartialEq)]
pub enum GetMyBookingsError {
    RepositoryError(String),
}

impl fmt::Display for GetMyBookingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetMyBookingsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetMyBookingsUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<Vec<Booking>, GetMyBookingsError>;
}
