use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::Booking;

#[derive(Debug, Clone, PartialEq)]
pub enum GetBookingError {
    NotFound,
    Forbidden,
    RepositoryError(String),
}

impl fmt::Display for GetBookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetBookingError::NotFound => write!(f, "booking not found"),
            GetBookingError::Forbidden => write!(f, "not allowed to view this booking"),
            GetBookingError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Visible to the booker, the property's agent and administrators.
#[async_trait]
pub trait GetBookingUseCase: Send + Sync {
    async fn execute(
        &self,
        booking_id: Uuid,
        actor: UserId,
        is_admin: bool,
    ) -> Result<Booking, GetBookingError>;
}
