use async_trait::async_trait;

use crate::modules::booking::application::domain::policies::BookingPolicy;
use crate::modules::booking::application::ports::incoming::use_cases::{
    CreateBookingCommand, CreateBookingError, CreateBookingUseCase,
};
use crate::modules::booking::application::ports::outgoing::{
    BookingRepository, BookingRepositoryError, CreateBookingData,
};
use crate::modules::booking::application::domain::entities::Booking;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateBookingService<R>
where
    R: BookingRepository,
{
    booking_repository: R,
}

impl<R> CreateBookingService<R>
where
    R: BookingRepository,
{
    pub fn new(booking_repository: R) -> Self {
        Self { booking_repository }
    }
}

#[async_trait]
impl<R> CreateBookingUseCase for CreateBookingService<R>
where
    R: BookingRepository + Send + Sync,
{
    async fn execute(&self, command: CreateBookingCommand) -> Result<Booking, CreateBookingError> {
        let period = BookingPolicy::validate(
            command.booking_type,
            command.start_date,
            command.end_date,
            command.booked_price,
        )
        .map_err(|e| CreateBookingError::Validation(e.to_string()))?;

        let data = CreateBookingData {
            property_id: command.property_id,
            user: command.user,
            booking_type: command.booking_type,
            period,
            booked_price: command.booked_price,
        };

        self.booking_repository
            .create_booking(data)
            .await
            .map_err(|e| match e {
                BookingRepositoryError::PropertyNotFound => CreateBookingError::PropertyNotFound,
                BookingRepositoryError::PeriodOverlap
                | BookingRepositoryError::SaleAlreadyBooked => {
                    CreateBookingError::Conflict(e.to_string())
                }
                BookingRepositoryError::DatabaseError(msg) => {
                    CreateBookingError::RepositoryError(msg)
                }
                BookingRepositoryError::NotFound => CreateBookingError::RepositoryError(
                    "unexpected booking not found while creating booking".to_string(),
                ),
            })
    }
}
