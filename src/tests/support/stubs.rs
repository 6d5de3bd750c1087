use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::{Booking, BookingStats};
use crate::modules::booking::application::ports::incoming::use_cases::{
    CreateBookingCommand, CreateBookingError, CreateBookingUseCase, DeleteAllBookingsError,
    DeleteAllBookingsUseCase, GetBookingError, GetBookingStatsError, GetBookingStatsUseCase,
    GetBookingUseCase, GetMyBookingsError, GetMyBookingsUseCase, ListBookingsError,
    ListBookingsUseCase, UpdateBookingStatusCommand, UpdateBookingStatusError,
    UpdateBookingStatusUseCase,
};
use crate::modules::property::application::domain::entities::Property;
use crate::modules::property::application::ports::incoming::use_cases::{
    AcceptSaleError, AcceptSaleUseCase, GetAgentBookingsError, GetAgentBookingsUseCase,
    GetAvailablePropertiesError, GetAvailablePropertiesUseCase, ToggleLikeError,
    ToggleLikeUseCase,
};
use crate::modules::property::application::ports::outgoing::AgentBookingView;

const UNUSED: &str = "not used in this test";

// ============================================================================
// Booking stubs
// ============================================================================

#[derive(Clone)]
pub struct StubCreateBookingUseCase {
    result: Result<Booking, CreateBookingError>,
}

impl StubCreateBookingUseCase {
    pub fn success(booking: Booking) -> Self {
        Self { result: Ok(booking) }
    }

    pub fn error(err: CreateBookingError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubCreateBookingUseCase {
    fn default() -> Self {
        Self::error(CreateBookingError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl CreateBookingUseCase for StubCreateBookingUseCase {
    async fn execute(&self, _command: CreateBookingCommand) -> Result<Booking, CreateBookingError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateBookingStatusUseCase {
    result: Result<Booking, UpdateBookingStatusError>,
}

impl StubUpdateBookingStatusUseCase {
    pub fn success(booking: Booking) -> Self {
        Self { result: Ok(booking) }
    }

    pub fn error(err: UpdateBookingStatusError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubUpdateBookingStatusUseCase {
    fn default() -> Self {
        Self::error(UpdateBookingStatusError::RepositoryError(
            UNUSED.to_string(),
        ))
    }
}

#[async_trait]
impl UpdateBookingStatusUseCase for StubUpdateBookingStatusUseCase {
    async fn execute(
        &self,
        _command: UpdateBookingStatusCommand,
    ) -> Result<Booking, UpdateBookingStatusError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetBookingUseCase {
    result: Result<Booking, GetBookingError>,
}

impl StubGetBookingUseCase {
    pub fn success(booking: Booking) -> Self {
        Self { result: Ok(booking) }
    }

    pub fn error(err: GetBookingError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetBookingUseCase {
    fn default() -> Self {
        Self::error(GetBookingError::NotFound)
    }
}

#[async_trait]
impl GetBookingUseCase for StubGetBookingUseCase {
    async fn execute(
        &self,
        _booking_id: Uuid,
        _actor: UserId,
        _is_admin: bool,
    ) -> Result<Booking, GetBookingError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetMyBookingsUseCase {
    result: Result<Vec<Booking>, GetMyBookingsError>,
}

impl StubGetMyBookingsUseCase {
    pub fn success(bookings: Vec<Booking>) -> Self {
        Self {
            result: Ok(bookings),
        }
    }

    pub fn error(err: GetMyBookingsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetMyBookingsUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl GetMyBookingsUseCase for StubGetMyBookingsUseCase {
    async fn execute(&self, _user: UserId) -> Result<Vec<Booking>, GetMyBookingsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListBookingsUseCase {
    result: Result<Vec<Booking>, ListBookingsError>,
}

impl StubListBookingsUseCase {
    pub fn success(bookings: Vec<Booking>) -> Self {
        Self {
            result: Ok(bookings),
        }
    }

    pub fn error(err: ListBookingsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubListBookingsUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl ListBookingsUseCase for StubListBookingsUseCase {
    async fn execute(&self, _page_num: Option<u64>) -> Result<Vec<Booking>, ListBookingsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetBookingStatsUseCase {
    result: Result<BookingStats, GetBookingStatsError>,
}

impl StubGetBookingStatsUseCase {
    pub fn success(stats: BookingStats) -> Self {
        Self { result: Ok(stats) }
    }

    pub fn error(err: GetBookingStatsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetBookingStatsUseCase {
    fn default() -> Self {
        Self::success(BookingStats {
            by_status: vec![],
            by_month: vec![],
        })
    }
}

#[async_trait]
impl GetBookingStatsUseCase for StubGetBookingStatsUseCase {
    async fn execute(&self) -> Result<BookingStats, GetBookingStatsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteAllBookingsUseCase {
    result: Result<u64, DeleteAllBookingsError>,
}

impl StubDeleteAllBookingsUseCase {
    pub fn success(deleted: u64) -> Self {
        Self {
            result: Ok(deleted),
        }
    }

    pub fn error(err: DeleteAllBookingsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubDeleteAllBookingsUseCase {
    fn default() -> Self {
        Self::success(0)
    }
}

#[async_trait]
impl DeleteAllBookingsUseCase for StubDeleteAllBookingsUseCase {
    async fn execute(&self) -> Result<u64, DeleteAllBookingsError> {
        self.result.clone()
    }
}

// ============================================================================
// Property stubs
// ============================================================================

#[derive(Clone)]
pub struct StubAcceptSaleUseCase {
    result: Result<Property, AcceptSaleError>,
}

impl StubAcceptSaleUseCase {
    pub fn success(property: Property) -> Self {
        Self {
            result: Ok(property),
        }
    }

    pub fn error(err: AcceptSaleError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubAcceptSaleUseCase {
    fn default() -> Self {
        Self::error(AcceptSaleError::BookingNotFound)
    }
}

#[async_trait]
impl AcceptSaleUseCase for StubAcceptSaleUseCase {
    async fn execute(&self, _booking_id: Uuid, _actor: UserId) -> Result<Property, AcceptSaleError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetAvailablePropertiesUseCase {
    result: Result<Vec<Property>, GetAvailablePropertiesError>,
}

impl StubGetAvailablePropertiesUseCase {
    pub fn success(properties: Vec<Property>) -> Self {
        Self {
            result: Ok(properties),
        }
    }

    pub fn error(err: GetAvailablePropertiesError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetAvailablePropertiesUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl GetAvailablePropertiesUseCase for StubGetAvailablePropertiesUseCase {
    async fn execute(&self) -> Result<Vec<Property>, GetAvailablePropertiesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubToggleLikeUseCase {
    result: Result<Property, ToggleLikeError>,
}

impl StubToggleLikeUseCase {
    pub fn success(property: Property) -> Self {
        Self {
            result: Ok(property),
        }
    }

    pub fn error(err: ToggleLikeError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubToggleLikeUseCase {
    fn default() -> Self {
        Self::error(ToggleLikeError::NotFound)
    }
}

#[async_trait]
impl ToggleLikeUseCase for StubToggleLikeUseCase {
    async fn execute(&self, _property_id: Uuid, _user: UserId) -> Result<Property, ToggleLikeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetAgentBookingsUseCase {
    result: Result<Vec<AgentBookingView>, GetAgentBookingsError>,
}

impl StubGetAgentBookingsUseCase {
    pub fn success(views: Vec<AgentBookingView>) -> Self {
        Self { result: Ok(views) }
    }

    pub fn error(err: GetAgentBookingsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetAgentBookingsUseCase {
    fn default() -> Self {
        Self::error(GetAgentBookingsError::NoProperties)
    }
}

#[async_trait]
impl GetAgentBookingsUseCase for StubGetAgentBookingsUseCase {
    async fn execute(
        &self,
        _agent: UserId,
    ) -> Result<Vec<AgentBookingView>, GetAgentBookingsError> {
        self.result.clone()
    }
}
