use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::{
    Booking, BookingStatus, BookingType,
};

/// Booking as returned by the API. Sale bookings carry no dates.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[schema(example = "2b1d3c7e-6f0a-4c55-9d51-0a7cfe9f3a10")]
    pub id: Uuid,

    /// Booked property id
    #[schema(example = "7d4c2a9e-1b3f-4e8a-a0c2-5f6e7d8c9b0a")]
    pub property: Uuid,

    /// Requesting user
    pub user: UserId,

    #[serde(rename = "type")]
    pub booking_type: BookingType,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2025-06-01")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2025-06-10")]
    pub end_date: Option<NaiveDate>,

    #[schema(example = 1200.0)]
    pub booked_price: f64,

    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            property: booking.property_id,
            user: booking.user,
            booking_type: booking.booking_type,
            start_date: booking.period.map(|p| p.start_date),
            end_date: booking.period.map(|p| p.end_date),
            booked_price: booking.booked_price,
            status: booking.status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
