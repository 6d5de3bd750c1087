use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::{
    Booking, BookingStatus, BookingType, RentalPeriod,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// A booking that already passed `BookingPolicy`. `period` is `Some` exactly
/// when `booking_type` is rent.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingData {
    pub property_id: Uuid,
    pub user: UserId,
    pub booking_type: BookingType,
    pub period: Option<RentalPeriod>,
    pub booked_price: f64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingRepositoryError {
    #[error("Booking not found")]
    NotFound,

    #[error("Property not found")]
    PropertyNotFound,

    #[error("Property already booked in this period")]
    PeriodOverlap,

    #[error("Property already has a sale booking")]
    SaleAlreadyBooked,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a pending booking. Property lookup, the overlap scan and the
    /// insert happen in one transaction with the property row locked.
    async fn create_booking(&self, data: CreateBookingData)
        -> Result<Booking, BookingRepositoryError>;

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, BookingRepositoryError>;

    /// Returns the number of deleted rows.
    async fn delete_all(&self) -> Result<u64, BookingRepositoryError>;
}
