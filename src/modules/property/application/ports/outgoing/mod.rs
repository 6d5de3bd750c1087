pub mod property_query;
pub mod property_repository;

pub use property_query::{AgentBookingView, BookerView, PropertyQuery, PropertyQueryError};
pub use property_repository::{PropertyRepository, PropertyRepositoryError};
