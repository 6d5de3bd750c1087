pub mod booking_query;
pub mod booking_repository;

pub use booking_query::{BookingPage, BookingQuery, BookingQueryError, PageOutOfRange};
pub use booking_repository::{BookingRepository, BookingRepositoryError, CreateBookingData};
