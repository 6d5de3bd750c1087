use async_trait::async_trait;

use crate::modules::booking::application::domain::entities::{Booking, BookingStatus};
use crate::modules::booking::application::ports::incoming::use_cases::{
    UpdateBookingStatusCommand, UpdateBookingStatusError, UpdateBookingStatusUseCase,
};
use crate::modules::booking::application::ports::outgoing::{
    BookingQuery, BookingQueryError, BookingRepository, BookingRepositoryError,
};

pub struct UpdateBookingStatusService<Q, R>
where
    Q: BookingQuery,
    R: BookingRepository,
{
    booking_query: Q,
    booking_repository: R,
}

impl<Q, R> UpdateBookingStatusService<Q, R>
where
    Q: BookingQuery,
    R: BookingRepository,
{
    pub fn new(booking_query: Q, booking_repository: R) -> Self {
        Self {
            booking_query,
            booking_repository,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateBookingStatusUseCase for UpdateBookingStatusService<Q, R>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateBookingStatusCommand,
    ) -> Result<Booking, UpdateBookingStatusError> {
        // Status is checked before any lookup.
        let status = match command.status.parse::<BookingStatus>() {
            Ok(s) if s.is_assignable() => s,
            _ => return Err(UpdateBookingStatusError::InvalidStatus(command.status)),
        };

        let booking = self
            .booking_query
            .get_by_id(command.booking_id)
            .await
            .map_err(|e| match e {
                BookingQueryError::NotFound => UpdateBookingStatusError::BookingNotFound,
                BookingQueryError::DatabaseError(msg) => {
                    UpdateBookingStatusError::RepositoryError(msg)
                }
            })?;

        let agent = self
            .booking_query
            .find_property_agent(booking.property_id)
            .await
            .map_err(|e| UpdateBookingStatusError::RepositoryError(e.to_string()))?
            .ok_or(UpdateBookingStatusError::PropertyNotFound)?;

        if !booking.is_party(command.actor) && agent != command.actor {
            return Err(UpdateBookingStatusError::Forbidden);
        }

        self.booking_repository
            .update_status(booking.id, status)
            .await
            .map_err(|e| match e {
                BookingRepositoryError::NotFound => UpdateBookingStatusError::BookingNotFound,
                BookingRepositoryError::PropertyNotFound => {
                    UpdateBookingStatusError::PropertyNotFound
                }
                BookingRepositoryError::PeriodOverlap
                | BookingRepositoryError::SaleAlreadyBooked => {
                    UpdateBookingStatusError::Conflict(e.to_string())
                }
                BookingRepositoryError::DatabaseError(msg) => {
                    UpdateBookingStatusError::RepositoryError(msg)
                }
            })
    }
}
