use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::{Booking, BookingStats};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// 1-based page over the admin booking listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPage {
    pub page: u64,
    pub per_page: u64,
}

impl BookingPage {
    pub const PAGE_SIZE: u64 = 10;

    /// `pageNum` absent or zero means "no paging". Pages whose offset does
    /// not fit a Postgres `bigint` are rejected.
    pub fn from_page_num(page_num: Option<u64>) -> Result<Option<Self>, PageOutOfRange> {
        let page = match page_num {
            Some(page) if page > 0 => page,
            _ => return Ok(None),
        };

        let offset = (page - 1)
            .checked_mul(Self::PAGE_SIZE)
            .filter(|offset| i64::try_from(*offset).is_ok());

        match offset {
            Some(_) => Ok(Some(Self {
                page,
                per_page: Self::PAGE_SIZE,
            })),
            None => Err(PageOutOfRange(page)),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("pageNum {0} is out of range")]
pub struct PageOutOfRange(pub u64);

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingQueryError {
    #[error("Booking not found")]
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
pub trait BookingQuery: Send + Sync {
    async fn get_by_id(&self, booking_id: Uuid) -> Result<Booking, BookingQueryError>;

    /// Agent of the property, `None` when the property does not exist.
    async fn find_property_agent(
        &self,
        property_id: Uuid,
    ) -> Result<Option<UserId>, BookingQueryError>;

    /// Bookings made by `user`, newest first.
    async fn list_by_user(&self, user: UserId) -> Result<Vec<Booking>, BookingQueryError>;

    /// Every booking, newest first; `None` returns the whole table.
    async fn list_all(&self, page: Option<BookingPage>) -> Result<Vec<Booking>, BookingQueryError>;

    async fn stats(&self) -> Result<BookingStats, BookingQueryError>;
}
