use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::booking::adapter::outgoing::sea_orm_entity::bookings::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::booking::application::domain::entities::{
    Booking, BookingStatus, BookingType, RentalPeriod,
};
use crate::modules::booking::application::ports::outgoing::{
    BookingRepository, BookingRepositoryError, CreateBookingData,
};
use crate::modules::property::adapter::outgoing::sea_orm_entity::properties;

/// Partial unique index: one sale booking per property, whatever its status.
const SALE_UNIQUE_INDEX: &str = "idx_bookings_sale_property_unique";
/// Exclusion constraint over active rent periods.
const RENT_OVERLAP_CONSTRAINT: &str = "bookings_no_overlapping_rent";

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct BookingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn create_booking_with_db<D: BookingDb>(
        db: &D,
        data: CreateBookingData,
    ) -> Result<Booking, BookingRepositoryError> {
        let now = Utc::now().fixed_offset();
        let property_id = data.property_id;

        let mut txn = db.begin().await.map_err(map_db_err)?;

        // FOR UPDATE on the property row serializes concurrent creations
        match txn.lock_property(property_id).await {
            Ok(true) => {}
            Ok(false) => {
                let _ = txn.rollback().await;
                return Err(BookingRepositoryError::PropertyNotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        }

        let conflict = match data.period {
            Some(period) => txn
                .find_overlapping_rent(property_id, period)
                .await
                .map(|found| found.map(|_| BookingRepositoryError::PeriodOverlap)),
            None => txn
                .find_sale_booking(property_id)
                .await
                .map(|found| found.map(|_| BookingRepositoryError::SaleAlreadyBooked)),
        };

        match conflict {
            Ok(None) => {}
            Ok(Some(err)) => {
                let _ = txn.rollback().await;
                tracing::info!(%property_id, "Booking rejected: {}", err);
                return Err(err);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        }

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            property_id: Set(property_id),
            user_id: Set(data.user.into()),
            booking_type: Set(data.booking_type.as_str().to_string()),
            start_date: Set(data.period.map(|p| p.start_date)),
            end_date: Set(data.period.map(|p| p.end_date)),
            booked_price: Set(data.booked_price),
            status: Set(BookingStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = match txn.insert_booking(model).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_constraint_err(e));
            }
        };

        txn.commit().await.map_err(map_constraint_err)?;

        bookings::to_domain(inserted).map_err(BookingRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryPostgres {
    async fn create_booking(
        &self,
        data: CreateBookingData,
    ) -> Result<Booking, BookingRepositoryError> {
        let db = SeaOrmDb {
            db: self.db.clone(),
        };
        Self::create_booking_with_db(&db, data).await
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, BookingRepositoryError> {
        // update_many skips ActiveModelBehavior::before_save
        let model = ActiveModel {
            status: Set(status.as_str().to_string()),
            #[cfg(feature = "no_db_triggers")]
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(booking_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_constraint_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(BookingRepositoryError::NotFound)?;

        bookings::to_domain(updated).map_err(BookingRepositoryError::DatabaseError)
    }

    async fn delete_all(&self) -> Result<u64, BookingRepositoryError> {
        let result = Entity::delete_many()
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> BookingRepositoryError {
    BookingRepositoryError::DatabaseError(e.to_string())
}

/// Translates the storage-level race guards into booking conflicts.
fn map_constraint_err(e: DbErr) -> BookingRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains(SALE_UNIQUE_INDEX)
    {
        BookingRepositoryError::SaleAlreadyBooked
    } else if msg.contains("exclusion")
        || msg.contains("23p01")
        || msg.contains(RENT_OVERLAP_CONSTRAINT)
    {
        BookingRepositoryError::PeriodOverlap
    } else {
        BookingRepositoryError::DatabaseError(e.to_string())
    }
}

// ============================================================================
// Minimal DB Facade (booking creation transaction)
// ============================================================================

#[async_trait]
trait BookingDb: Send + Sync {
    type Txn: BookingTxn;
    async fn begin(&self) -> Result<Self::Txn, DbErr>;
}

#[async_trait]
trait BookingTxn: Send {
    /// Locks the property row; `false` when it does not exist.
    async fn lock_property(&mut self, property_id: Uuid) -> Result<bool, DbErr>;
    async fn find_overlapping_rent(
        &mut self,
        property_id: Uuid,
        period: RentalPeriod,
    ) -> Result<Option<Uuid>, DbErr>;
    async fn find_sale_booking(&mut self, property_id: Uuid) -> Result<Option<Uuid>, DbErr>;
    async fn insert_booking(&mut self, model: ActiveModel) -> Result<bookings::Model, DbErr>;
    async fn commit(self) -> Result<(), DbErr>;
    async fn rollback(self) -> Result<(), DbErr>;
}

struct SeaOrmDb {
    db: Arc<DatabaseConnection>,
}

struct SeaOrmTxn {
    txn: DatabaseTransaction,
}

#[async_trait]
impl BookingDb for SeaOrmDb {
    type Txn = SeaOrmTxn;

    async fn begin(&self) -> Result<Self::Txn, DbErr> {
        let txn = self.db.begin().await?;
        Ok(SeaOrmTxn { txn })
    }
}

#[async_trait]
impl BookingTxn for SeaOrmTxn {
    async fn lock_property(&mut self, property_id: Uuid) -> Result<bool, DbErr> {
        let found = properties::Entity::find_by_id(property_id)
            .lock_exclusive()
            .one(&self.txn)
            .await?;
        Ok(found.is_some())
    }

    async fn find_overlapping_rent(
        &mut self,
        property_id: Uuid,
        period: RentalPeriod,
    ) -> Result<Option<Uuid>, DbErr> {
        let active = [BookingStatus::Pending, BookingStatus::Confirmed].map(|s| s.as_str());

        let found = Entity::find()
            .filter(Column::PropertyId.eq(property_id))
            .filter(Column::BookingType.eq(BookingType::Rent.as_str()))
            .filter(Column::Status.is_in(active))
            .filter(Column::StartDate.lte(period.end_date))
            .filter(Column::EndDate.gte(period.start_date))
            .one(&self.txn)
            .await?;

        Ok(found.map(|m| m.id))
    }

    async fn find_sale_booking(&mut self, property_id: Uuid) -> Result<Option<Uuid>, DbErr> {
        let found = Entity::find()
            .filter(Column::PropertyId.eq(property_id))
            .filter(Column::BookingType.eq(BookingType::Sale.as_str()))
            .one(&self.txn)
            .await?;

        Ok(found.map(|m| m.id))
    }

    async fn insert_booking(&mut self, model: ActiveModel) -> Result<bookings::Model, DbErr> {
        model.insert(&self.txn).await
    }

    async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}

// ============================================================================
// Tests
// ============================================================================
