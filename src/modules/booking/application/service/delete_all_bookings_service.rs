use async_trait::async_trait;

use crate::modules::booking::application::ports::incoming::use_cases::{
    DeleteAllBookingsError, DeleteAllBookingsUseCase,
};
use crate::modules::booking::application::ports::outgoing::BookingRepository;

pub struct DeleteAllBookingsService<R>
where
    R: BookingRepository,
{
    booking_repository: R,
}

impl<R> DeleteAllBookingsService<R>
where
    R: BookingRepository,
{
    pub fn new(booking_repository: R) -> Self {
        Self { booking_repository }
    }
}

#[async_trait]
impl<R> DeleteAllBookingsUseCase for DeleteAllBookingsService<R>
where
    R: BookingRepository + Send + Sync,
{
    async fn execute(&self) -> Result<u64, DeleteAllBookingsError> {
        let deleted = self
            .booking_repository
            .delete_all()
            .await
            .map_err(|e| DeleteAllBookingsError::RepositoryError(e.to_string()))?;

        tracing::warn!(deleted, "All bookings deleted");
        Ok(deleted)
    }
}
