use async_trait::async_trait;
use std::fmt;

use crate::modules::booking::application::domain::entities::Booking;

#[derive(Debug, Clone, PartialEq)]
pub enum ListBookingsError {
    InvalidPage(String),
    RepositoryError(String),
}

impl fmt::Display for ListBookingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListBookingsError::InvalidPage(msg) => write!(f, "{}", msg),
            ListBookingsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListBookingsUseCase: Send + Sync {
    /// `page_num` is 1-based; `None` or `Some(0)` lists everything.
    async fn execute(&self, page_num: Option<u64>) -> Result<Vec<Booking>, ListBookingsError>;
}
