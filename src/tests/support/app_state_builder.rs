use actix_web::web;
use std::sync::Arc;

use crate::modules::booking::application::booking_use_cases::BookingUseCases;
use crate::modules::booking::application::ports::incoming::use_cases::{
    CreateBookingUseCase, DeleteAllBookingsUseCase, GetBookingStatsUseCase, GetBookingUseCase,
    GetMyBookingsUseCase, ListBookingsUseCase, UpdateBookingStatusUseCase,
};
use crate::modules::property::application::ports::incoming::use_cases::{
    AcceptSaleUseCase, GetAgentBookingsUseCase, GetAvailablePropertiesUseCase, ToggleLikeUseCase,
};
use crate::modules::property::application::property_use_cases::PropertyUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts out as a stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    booking: BookingUseCases,
    property: PropertyUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            booking: BookingUseCases {
                create: Arc::new(StubCreateBookingUseCase::default()),
                update_status: Arc::new(StubUpdateBookingStatusUseCase::default()),
                get_single: Arc::new(StubGetBookingUseCase::default()),
                get_mine: Arc::new(StubGetMyBookingsUseCase::default()),
                list_all: Arc::new(StubListBookingsUseCase::default()),
                stats: Arc::new(StubGetBookingStatsUseCase::default()),
                delete_all: Arc::new(StubDeleteAllBookingsUseCase::default()),
            },
            property: PropertyUseCases {
                accept_sale: Arc::new(StubAcceptSaleUseCase::default()),
                get_available: Arc::new(StubGetAvailablePropertiesUseCase::default()),
                toggle_like: Arc::new(StubToggleLikeUseCase::default()),
                get_agent_bookings: Arc::new(StubGetAgentBookingsUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ------------------------------------------------------------------
    // booking
    // ------------------------------------------------------------------

    pub fn with_create_booking(
        mut self,
        uc: impl CreateBookingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.create = Arc::new(uc);
        self
    }

    pub fn with_update_booking_status(
        mut self,
        uc: impl UpdateBookingStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.update_status = Arc::new(uc);
        self
    }

    pub fn with_get_booking(mut self, uc: impl GetBookingUseCase + Send + Sync + 'static) -> Self {
        self.booking.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_my_bookings(
        mut self,
        uc: impl GetMyBookingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.get_mine = Arc::new(uc);
        self
    }

    pub fn with_list_bookings(
        mut self,
        uc: impl ListBookingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.list_all = Arc::new(uc);
        self
    }

    pub fn with_booking_stats(
        mut self,
        uc: impl GetBookingStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.stats = Arc::new(uc);
        self
    }

    pub fn with_delete_all_bookings(
        mut self,
        uc: impl DeleteAllBookingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.delete_all = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // property
    // ------------------------------------------------------------------

    pub fn with_accept_sale(mut self, uc: impl AcceptSaleUseCase + Send + Sync + 'static) -> Self {
        self.property.accept_sale = Arc::new(uc);
        self
    }

    pub fn with_get_available_properties(
        mut self,
        uc: impl GetAvailablePropertiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.property.get_available = Arc::new(uc);
        self
    }

    pub fn with_toggle_like(mut self, uc: impl ToggleLikeUseCase + Send + Sync + 'static) -> Self {
        self.property.toggle_like = Arc::new(uc);
        self
    }

    pub fn with_get_agent_bookings(
        mut self,
        uc: impl GetAgentBookingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.property.get_agent_bookings = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            booking: self.booking,
            property: self.property,
        })
    }
}
