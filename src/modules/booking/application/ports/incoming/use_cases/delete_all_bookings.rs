use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteAllBookingsError {
    RepositoryError(String),
}

impl fmt::Display for DeleteAllBookingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteAllBookingsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteAllBookingsUseCase: Send + Sync {
    /// Returns how many bookings were removed.
    async fn execute(&self) -> Result<u64, DeleteAllBookingsError>;
}
