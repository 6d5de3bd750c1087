use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::Booking;
use crate::modules::booking::application::ports::incoming::use_cases::{
    GetBookingError, GetBookingUseCase,
};
use crate::modules::booking::application::ports::outgoing::{BookingQuery, BookingQueryError};

pub struct GetBookingService<Q>
where
    Q: BookingQuery,
{
    booking_query: Q,
}

impl<Q> GetBookingService<Q>
where
    Q: BookingQuery,
{
    pub fn new(booking_query: Q) -> Self {
        Self { booking_query }
    }
}

#[async_trait]
impl<Q> GetBookingUseCase for GetBookingService<Q>
where
    Q: BookingQuery + Send + Sync,
{
    async fn execute(
        &self,
        booking_id: Uuid,
        actor: UserId,
        is_admin: bool,
    ) -> Result<Booking, GetBookingError> {
        let booking = self
            .booking_query
            .get_by_id(booking_id)
            .await
            .map_err(|e| match e {
                BookingQueryError::NotFound => GetBookingError::NotFound,
                BookingQueryError::DatabaseError(msg) => GetBookingError::RepositoryError(msg),
            })?;

        if is_admin || booking.is_party(actor) {
            return Ok(booking);
        }

        let agent = self
            .booking_query
            .find_property_agent(booking.property_id)
            .await
            .map_err(|e| GetBookingError::RepositoryError(e.to_string()))?;

        match agent {
            Some(agent) if agent == actor => Ok(booking),
            _ => Err(GetBookingError::Forbidden),
        }
    }
}
