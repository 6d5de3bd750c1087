use async_trait::async_trait;

use crate::modules::booking::application::domain::entities::Booking;
use crate::modules::booking::application::ports::incoming::use_cases::{
    ListBookingsError, ListBookingsUseCase,
};
use crate::modules::booking::application::ports::outgoing::{BookingPage, BookingQuery};

pub struct ListBookingsService<Q>
where
    Q: BookingQuery,
{
    booking_query: Q,
}

impl<Q> ListBookingsService<Q>
where
    Q: BookingQuery,
{
    pub fn new(booking_query: Q) -> Self {
        Self { booking_query }
    }
}

#[async_trait]
impl<Q> ListBookingsUseCase for ListBookingsService<Q>
where
    Q: BookingQuery + Send + Sync,
{
    async fn execute(&self, page_num: Option<u64>) -> Result<Vec<Booking>, ListBookingsError> {
        let page = BookingPage::from_page_num(page_num)
            .map_err(|e| ListBookingsError::InvalidPage(e.to_string()))?;

        self.booking_query
            .list_all(page)
            .await
            .map_err(|e| ListBookingsError::RepositoryError(e.to_string()))
    }
}
