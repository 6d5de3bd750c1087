use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::property::application::domain::entities::Property;

#[derive(Debug, Clone, PartialEq)]
pub enum AcceptSaleError {
    BookingNotFound,
    PropertyNotFound,
    NotSaleBooking,
    Forbidden,
    RepositoryError(String),
}

impl fmt::Display for AcceptSaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptSaleError::BookingNotFound => write!(f, "booking not found"),
            AcceptSaleError::PropertyNotFound => write!(f, "property not found"),
            AcceptSaleError::NotSaleBooking => write!(f, "booking is not a sale booking"),
            AcceptSaleError::Forbidden => write!(f, "only the property's agent can accept a sale"),
            AcceptSaleError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Marks the booked property as purchased. The booking itself keeps its status.
#[async_trait]
pub trait AcceptSaleUseCase: Send + Sync {
    async fn execute(&self, booking_id: Uuid, actor: UserId) -> Result<Property, AcceptSaleError>;
}
