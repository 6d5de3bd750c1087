use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::{Booking, BookingType};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub property_id: Uuid,
    pub user: UserId,
    pub booking_type: BookingType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub booked_price: f64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum CreateBookingError {
    Validation(String),
    PropertyNotFound,
    Conflict(String),
    RepositoryError(String),
}

impl fmt::Display for CreateBookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateBookingError::Validation(msg) => write!(f, "validation error: {}", msg),
            CreateBookingError::PropertyNotFound => write!(f, "property not found"),
            CreateBookingError::Conflict(msg) => write!(f, "booking conflict: {}", msg),
            CreateBookingError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateBookingUseCase: Send + Sync {
    async fn execute(&self, command: CreateBookingCommand) -> Result<Booking, CreateBookingError>;
}
