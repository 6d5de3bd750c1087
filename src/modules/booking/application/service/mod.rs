mod create_booking_service;
mod delete_all_bookings_service;
mod get_booking_service;
mod get_booking_stats_service;
mod get_my_bookings_service;
mod list_bookings_service;
mod update_booking_status_service;

pub use create_booking_service::CreateBookingService;
pub use delete_all_bookings_service::DeleteAllBookingsService;
pub use get_booking_service::GetBookingService;
pub use get_booking_stats_service::GetBookingStatsService;
pub use get_my_bookings_service::GetMyBookingsService;
pub use list_bookings_service::ListBookingsService;
pub use update_booking_status_service::UpdateBookingStatusService;
