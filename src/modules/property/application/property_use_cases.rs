use std::sync::Arc;

use crate::modules::property::application::ports::incoming::use_cases::{
    AcceptSaleUseCase, GetAgentBookingsUseCase, GetAvailablePropertiesUseCase, ToggleLikeUseCase,
};

#[derive(Clone)]
pub struct PropertyUseCases {
    pub accept_sale: Arc<dyn AcceptSaleUseCase + Send + Sync>,
    pub get_available: Arc<dyn GetAvailablePropertiesUseCase + Send + Sync>,
    pub toggle_like: Arc<dyn ToggleLikeUseCase + Send + Sync>,
    pub get_agent_bookings: Arc<dyn GetAgentBookingsUseCase + Send + Sync>,
}
