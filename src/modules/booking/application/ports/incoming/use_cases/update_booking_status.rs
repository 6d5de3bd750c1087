use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::Booking;

#[derive(Debug, Clone)]
pub struct UpdateBookingStatusCommand {
    pub booking_id: Uuid,
    /// Raw status as sent by the client; only "pending" and "cancelled" pass.
    pub status: String,
    pub actor: UserId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateBookingStatusError {
    InvalidStatus(String),
    BookingNotFound,
    PropertyNotFound,
    Forbidden,
    Conflict(String),
    RepositoryError(String),
}

impl fmt::Display for UpdateBookingStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateBookingStatusError::InvalidStatus(s) => write!(f, "invalid status: {}", s),
            UpdateBookingStatusError::BookingNotFound => write!(f, "booking not found"),
            UpdateBookingStatusError::PropertyNotFound => write!(f, "property not found"),
            UpdateBookingStatusError::Forbidden => {
                write!(f, "not allowed to update this booking")
            }
            UpdateBookingStatusError::Conflict(msg) => write!(f, "booking conflict: {}", msg),
            UpdateBookingStatusError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdateBookingStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateBookingStatusCommand,
    ) -> Result<Booking, UpdateBookingStatusError>;
}
