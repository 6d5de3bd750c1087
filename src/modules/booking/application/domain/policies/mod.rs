pub mod booking_policy;

pub use booking_policy::{BookingPolicy, BookingValidationError};
