mod create_booking;
mod delete_all_bookings;
mod get_booking;
mod get_booking_stats;
mod get_my_bookings;
mod list_bookings;
mod update_booking_status;

pub use create_booking::{CreateBookingCommand, CreateBookingError, CreateBookingUseCase};
pub use delete_all_bookings::{DeleteAllBookingsError, DeleteAllBookingsUseCase};
pub use get_booking::{GetBookingError, GetBookingUseCase};
pub use get_booking_stats::{GetBookingStatsError, GetBookingStatsUseCase};
pub use get_my_bookings::{GetMyBookingsError, GetMyBookingsUseCase};
pub use list_bookings::{ListBookingsError, ListBookingsUseCase};
pub use update_booking_status::{
    UpdateBookingStatusCommand, UpdateBookingStatusError, UpdateBookingStatusUseCase,
};
