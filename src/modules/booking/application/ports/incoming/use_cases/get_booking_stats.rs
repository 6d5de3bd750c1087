use async_trait::async_trait;
use std::fmt;

use crate::modules::booking::application::domain::entities::BookingStats;

#[derive(Debug, Clone, PartialEq)]
pub enum GetBookingStatsError {
    RepositoryError(String),
}

impl fmt::Display for GetBookingStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetBookingStatsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetBookingStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<BookingStats, GetBookingStatsError>;
}
