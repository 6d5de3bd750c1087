mod accept_sale;
mod get_agent_bookings;
mod get_available_properties;
mod toggle_like;

pub use accept_sale::accept_sale_handler;
pub use get_agent_bookings::{get_agent_bookings_handler, AgentBookingResponse};
pub use get_available_properties::get_available_properties_handler;
pub use toggle_like::toggle_like_handler;

pub use accept_sale::__path_accept_sale_handler;
pub use get_agent_bookings::__path_get_agent_bookings_handler;
pub use get_available_properties::__path_get_available_properties_handler;
pub use toggle_like::__path_toggle_like_handler;
