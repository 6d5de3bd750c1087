use async_trait::async_trait;

use crate::modules::booking::application::domain::entities::BookingStats;
use crate::modules::booking::application::ports::incoming::use_cases::{
    GetBookingStatsError, GetBookingStatsUseCase,
};
use crate::modules::booking::application::ports::outgoing::BookingQuery;

pub struct GetBookingStatsService<Q>
where
    Q: BookingQuery,
{
    booking_query: Q,
}

impl<Q> GetBookingStatsService<Q>
where
    Q: BookingQuery,
{
    pub fn new(booking_query: Q) -> Self {
        Self { booking_query }
    }
}

#[async_trait]
impl<Q> GetBookingStatsUseCase for GetBookingStatsService<Q>
where
    Q: BookingQuery + Send + Sync,
{
    async fn execute(&self) -> Result<BookingStats, GetBookingStatsError> {
        self.booking_query
            .stats()
            .await
            .map_err(|e| GetBookingStatsError::RepositoryError(e.to_string()))
    }
}
