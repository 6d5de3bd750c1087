mod accept_sale;
mod get_agent_bookings;
mod get_available_properties;
mod toggle_like;

pub use accept_sale::{AcceptSaleError, AcceptSaleUseCase};
pub use get_agent_bookings::{GetAgentBookingsError, GetAgentBookingsUseCase};
pub use get_available_properties::{GetAvailablePropertiesError, GetAvailablePropertiesUseCase};
pub use toggle_like::{ToggleLikeError, ToggleLikeUseCase};
