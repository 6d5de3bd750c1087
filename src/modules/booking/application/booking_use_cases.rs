use std::sync::Arc;

use crate::modules::booking::application::ports::incoming::use_cases::{
    CreateBookingUseCase, DeleteAllBookingsUseCase, GetBookingStatsUseCase, GetBookingUseCase,
    GetMyBookingsUseCase, ListBookingsUseCase, UpdateBookingStatusUseCase,
};

#[derive(Clone)]
pub struct BookingUseCases {
    pub create: Arc<dyn CreateBookingUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateBookingStatusUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetBookingUseCase + Send + Sync>,
    pub get_mine: Arc<dyn GetMyBookingsUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListBookingsUseCase + Send + Sync>,
    pub stats: Arc<dyn GetBookingStatsUseCase + Send + Sync>,
    pub delete_all: Arc<dyn DeleteAllBookingsUseCase + Send + Sync>,
}
