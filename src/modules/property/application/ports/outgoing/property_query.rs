use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::Booking;
use crate::modules::property::application::domain::entities::Property;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookerView {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// A booking on one of the agent's properties, with the booker's contact details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentBookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub property_title: String,
    pub booker: Option<BookerView>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyQueryError {
    #[error("Property not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PropertyQuery: Send + Sync {
    async fn get_by_id(&self, property_id: Uuid) -> Result<Property, PropertyQueryError>;

    async fn find_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, PropertyQueryError>;

    /// Properties not held by any pending, confirmed or completed booking and
    /// listed for sale or rent, newest first. Booking dates are not considered.
    async fn list_available(&self) -> Result<Vec<Property>, PropertyQueryError>;

    async fn list_agent_property_ids(&self, agent: UserId)
        -> Result<Vec<Uuid>, PropertyQueryError>;

    /// Newest first.
    async fn list_bookings_for_properties(
        &self,
        property_ids: Vec<Uuid>,
    ) -> Result<Vec<AgentBookingView>, PropertyQueryError>;
}
