mod booking_response;
mod create_booking;
mod delete_all_bookings;
mod get_booking;
mod get_booking_stats;
mod get_my_bookings;
mod list_bookings;
mod update_booking_status;

pub use booking_response::BookingResponse;
pub use create_booking::{create_booking_handler, CreateBookingRequest};
pub use delete_all_bookings::{delete_all_bookings_handler, DeleteAllBookingsResponse};
pub use get_booking::get_booking_handler;
pub use get_booking_stats::get_booking_stats_handler;
pub use get_my_bookings::get_my_bookings_handler;
pub use list_bookings::{list_bookings_handler, ListBookingsQuery};
pub use update_booking_status::{update_booking_status_handler, UpdateBookingStatusRequest};

pub use create_booking::__path_create_booking_handler;
pub use delete_all_bookings::__path_delete_all_bookings_handler;
pub use get_booking::__path_get_booking_handler;
pub use get_booking_stats::__path_get_booking_stats_handler;
pub use get_my_bookings::__path_get_my_bookings_handler;
pub use list_bookings::__path_list_bookings_handler;
pub use update_booking_status::__path_update_booking_status_handler;
