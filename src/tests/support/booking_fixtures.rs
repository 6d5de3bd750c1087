use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::{
    Booking, BookingStats, BookingStatus, BookingType, MonthlyStat, RentalPeriod, StatusStat,
};
use crate::modules::booking::application::ports::outgoing::{
    BookingPage, BookingQuery, BookingQueryError, BookingRepository, BookingRepositoryError,
    CreateBookingData,
};

pub fn sample_rent_booking() -> Booking {
    let now = Utc::now();
    Booking {
        id: Uuid::new_v4(),
        property_id: Uuid::new_v4(),
        user: UserId::from(Uuid::new_v4()),
        booking_type: BookingType::Rent,
        period: Some(RentalPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        }),
        booked_price: 1000.0,
        status: BookingStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_sale_booking() -> Booking {
    Booking {
        booking_type: BookingType::Sale,
        period: None,
        booked_price: 250_000.0,
        ..sample_rent_booking()
    }
}

//
// ──────────────────────────────────────────────────────────
// In-memory store
// ──────────────────────────────────────────────────────────
// Mirrors the Postgres adapter rules: one lock held across
// conflict scan and insert, sale slot per property, overlap
// check on rent re-activation.
//

#[derive(Default)]
struct StoreState {
    property_agents: HashMap<Uuid, UserId>,
    bookings: Vec<Booking>,
}

#[derive(Clone, Default)]
pub struct InMemoryBookingStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryBookingStore {
    pub fn with_properties(property_ids: &[Uuid]) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for id in property_ids {
                state
                    .property_agents
                    .insert(*id, UserId::from(Uuid::new_v4()));
            }
        }
        store
    }

    pub fn with_property(self, property_id: Uuid, agent: UserId) -> Self {
        self.state
            .lock()
            .unwrap()
            .property_agents
            .insert(property_id, agent);
        self
    }

    pub fn seed(&self, booking: Booking) {
        self.state.lock().unwrap().bookings.push(booking);
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().bookings.len()
    }

    pub fn set_status(&self, booking_id: Uuid, status: BookingStatus) {
        let mut state = self.state.lock().unwrap();
        if let Some(b) = state.bookings.iter_mut().find(|b| b.id == booking_id) {
            b.status = status;
        }
    }

    fn overlaps_active(bookings: &[Booking], candidate: &Booking) -> bool {
        let period = match candidate.period {
            Some(p) => p,
            None => return false,
        };

        bookings.iter().any(|b| {
            b.id != candidate.id
                && b.property_id == candidate.property_id
                && b.booking_type == BookingType::Rent
                && b.status.is_active()
                && b.period.map(|p| p.overlaps(&period)).unwrap_or(false)
        })
    }

    fn newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
    async fn create_booking(
        &self,
        data: CreateBookingData,
    ) -> Result<Booking, BookingRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if !state.property_agents.contains_key(&data.property_id) {
            return Err(BookingRepositoryError::PropertyNotFound);
        }

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            property_id: data.property_id,
            user: data.user,
            booking_type: data.booking_type,
            period: data.period,
            booked_price: data.booked_price,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        match booking.booking_type {
            BookingType::Rent => {
                if Self::overlaps_active(&state.bookings, &booking) {
                    return Err(BookingRepositoryError::PeriodOverlap);
                }
            }
            BookingType::Sale => {
                let taken = state.bookings.iter().any(|b| {
                    b.property_id == booking.property_id && b.booking_type == BookingType::Sale
                });
                if taken {
                    return Err(BookingRepositoryError::SaleAlreadyBooked);
                }
            }
        }

        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, BookingRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let mut candidate = state
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or(BookingRepositoryError::NotFound)?;
        candidate.status = status;

        if candidate.booking_type == BookingType::Rent
            && status.is_active()
            && Self::overlaps_active(&state.bookings, &candidate)
        {
            return Err(BookingRepositoryError::PeriodOverlap);
        }

        candidate.updated_at = Utc::now();
        if let Some(slot) = state.bookings.iter_mut().find(|b| b.id == booking_id) {
            *slot = candidate.clone();
        }
        Ok(candidate)
    }

    async fn delete_all(&self) -> Result<u64, BookingRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let n = state.bookings.len() as u64;
        state.bookings.clear();
        Ok(n)
    }
}

#[async_trait]
impl BookingQuery for InMemoryBookingStore {
    async fn get_by_id(&self, booking_id: Uuid) -> Result<Booking, BookingQueryError> {
        self.state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or(BookingQueryError::NotFound)
    }

    async fn find_property_agent(
        &self,
        property_id: Uuid,
    ) -> Result<Option<UserId>, BookingQueryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .property_agents
            .get(&property_id)
            .copied())
    }

    async fn list_by_user(&self, user: UserId) -> Result<Vec<Booking>, BookingQueryError> {
        let state = self.state.lock().unwrap();
        let mine = state
            .bookings
            .iter()
            .filter(|b| b.user == user)
            .cloned()
            .collect();
        Ok(Self::newest_first(mine))
    }

    async fn list_all(
        &self,
        page: Option<BookingPage>,
    ) -> Result<Vec<Booking>, BookingQueryError> {
        let all = Self::newest_first(self.state.lock().unwrap().bookings.clone());

        Ok(match page {
            Some(p) => all
                .into_iter()
                .skip(p.offset() as usize)
                .take(p.per_page as usize)
                .collect(),
            None => all,
        })
    }

    async fn stats(&self) -> Result<BookingStats, BookingQueryError> {
        let state = self.state.lock().unwrap();

        let mut by_status: BTreeMap<&'static str, (BookingStatus, i64, f64)> = BTreeMap::new();
        let mut by_month: BTreeMap<(i32, u32), i64> = BTreeMap::new();

        for b in &state.bookings {
            let entry = by_status
                .entry(b.status.as_str())
                .or_insert((b.status, 0, 0.0));
            entry.1 += 1;
            entry.2 += b.booked_price;

            *by_month
                .entry((b.created_at.year(), b.created_at.month()))
                .or_insert(0) += 1;
        }

        Ok(BookingStats {
            by_status: by_status
                .into_values()
                .map(|(status, total_bookings, total_amount)| StatusStat {
                    status,
                    total_bookings,
                    total_amount,
                })
                .collect(),
            by_month: by_month
                .into_iter()
                .map(|((year, month), total_bookings)| MonthlyStat {
                    year,
                    month,
                    total_bookings,
                })
                .collect(),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Failing repository
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct FailingBookingRepository {
    error: BookingRepositoryError,
}

impl FailingBookingRepository {
    pub fn new(error: BookingRepositoryError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl BookingRepository for FailingBookingRepository {
    async fn create_booking(
        &self,
        _data: CreateBookingData,
    ) -> Result<Booking, BookingRepositoryError> {
        Err(self.error.clone())
    }

    async fn update_status(
        &self,
        _booking_id: Uuid,
        _status: BookingStatus,
    ) -> Result<Booking, BookingRepositoryError> {
        Err(self.error.clone())
    }

    async fn delete_all(&self) -> Result<u64, BookingRepositoryError> {
        Err(self.error.clone())
    }
}
