use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::property::application::ports::incoming::use_cases::{
    GetAgentBookingsError, GetAgentBookingsUseCase,
};
use crate::modules::property::application::ports::outgoing::{AgentBookingView, PropertyQuery};

pub struct GetAgentBookingsService<Q>
where
    Q: PropertyQuery,
{
    property_query: Q,
}

impl<Q> GetAgentBookingsService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(property_query: Q) -> Self {
        Self { property_query }
    }
}

#[async_trait]
impl<Q> GetAgentBookingsUseCase for GetAgentBookingsService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(
        &self,
        agent: UserId,
    ) -> Result<Vec<AgentBookingView>, GetAgentBookingsError> {
        let property_ids = self
            .property_query
            .list_agent_property_ids(agent)
            .await
            .map_err(|e| GetAgentBookingsError::RepositoryError(e.to_string()))?;

        if property_ids.is_empty() {
            return Err(GetAgentBookingsError::NoProperties);
        }

        let bookings = self
            .property_query
            .list_bookings_for_properties(property_ids)
            .await
            .map_err(|e| GetAgentBookingsError::RepositoryError(e.to_string()))?;

        if bookings.is_empty() {
            return Err(GetAgentBookingsError::NoBookings);
        }

        Ok(bookings)
    }
}
