mod accept_sale_service;
mod get_agent_bookings_service;
mod get_available_properties_service;
mod toggle_like_service;

pub use accept_sale_service::AcceptSaleService;
pub use get_agent_bookings_service::GetAgentBookingsService;
pub use get_available_properties_service::GetAvailablePropertiesService;
pub use toggle_like_service::ToggleLikeService;
