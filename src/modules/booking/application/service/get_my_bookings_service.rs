use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::Booking;
use crate::modules::booking::application::ports::incoming::use_cases::{
    GetMyBookingsError, GetMyBookingsUseCase,
};
use crate::modules::booking::application::ports::outgoing::BookingQuery;

pub struct GetMyBookingsService<Q>
where
    Q: BookingQuery,
{
    booking_query: Q,
}

impl<Q> GetMyBookingsService<Q>
where
    Q: BookingQuery,
{
    pub fn new(booking_query: Q) -> Self {
        Self { booking_query }
    }
}

#[async_trait]
impl<Q> GetMyBookingsUseCase for GetMyBookingsService<Q>
where
    Q: BookingQuery + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<Vec<Booking>, GetMyBookingsError> {
        self.booking_query
            .list_by_user(user)
            .await
            .map_err(|e| GetMyBookingsError::RepositoryError(e.to_string()))
    }
}
