use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::modules::property::application::ports::outgoing::AgentBookingView;

#[derive(Debug, Clone, PartialEq)]
pub enum GetAgentBookingsError {
    NoProperties,
    NoBookings,
    RepositoryError(String),
}

impl fmt::Display for GetAgentBookingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetAgentBookingsError::NoProperties => write!(f, "You have no properties yet"),
            GetAgentBookingsError::NoBookings => {
                write!(f, "No bookings for your properties yet")
            }
            GetAgentBookingsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetAgentBookingsUseCase: Send + Sync {
    async fn execute(&self, agent: UserId) -> Result<Vec<AgentBookingView>, GetAgentBookingsError>;
}
