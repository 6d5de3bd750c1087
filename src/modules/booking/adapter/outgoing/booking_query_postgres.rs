use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::adapter::outgoing::sea_orm_entity::bookings::{
    self, Column, Entity,
};
use crate::modules::booking::application::domain::entities::{
    Booking, BookingStats, BookingStatus, MonthlyStat, StatusStat,
};
use crate::modules::booking::application::ports::outgoing::{
    BookingPage, BookingQuery, BookingQueryError,
};
use crate::modules::property::adapter::outgoing::sea_orm_entity::properties;

const STATUS_STATS_SQL: &str = r#"
    SELECT status,
           COUNT(*)::bigint AS total_bookings,
           COALESCE(SUM(booked_price), 0)::double precision AS total_amount
    FROM bookings
    GROUP BY status
    ORDER BY status
"#;

const MONTHLY_STATS_SQL: &str = r#"
    SELECT EXTRACT(YEAR FROM created_at)::int AS year,
           EXTRACT(MONTH FROM created_at)::int AS month,
           COUNT(*)::bigint AS total_bookings
    FROM bookings
    GROUP BY 1, 2
    ORDER BY 1, 2
"#;

#[derive(Debug, FromQueryResult)]
struct StatusRow {
    status: String,
    total_bookings: i64,
    total_amount: f64,
}

#[derive(Debug, FromQueryResult)]
struct MonthRow {
    year: i32,
    month: i32,
    total_bookings: i64,
}

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct BookingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingQuery for BookingQueryPostgres {
    async fn get_by_id(&self, booking_id: Uuid) -> Result<Booking, BookingQueryError> {
        let model = Entity::find_by_id(booking_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BookingQueryError::NotFound)?;

        to_domain(model)
    }

    async fn find_property_agent(
        &self,
        property_id: Uuid,
    ) -> Result<Option<UserId>, BookingQueryError> {
        let property = properties::Entity::find_by_id(property_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(property.map(|p| UserId::from(p.agent_id)))
    }

    async fn list_by_user(&self, user: UserId) -> Result<Vec<Booking>, BookingQueryError> {
        let user_uuid: Uuid = user.into();

        let models = Entity::find()
            .filter(Column::UserId.eq(user_uuid))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn list_all(&self, page: Option<BookingPage>) -> Result<Vec<Booking>, BookingQueryError> {
        let mut query = Entity::find().order_by_desc(Column::CreatedAt);

        if let Some(page) = page {
            query = query.offset(page.offset()).limit(page.per_page);
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn stats(&self) -> Result<BookingStats, BookingQueryError> {
        let status_rows = StatusRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            STATUS_STATS_SQL,
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        let month_rows = MonthRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            MONTHLY_STATS_SQL,
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        let by_status = status_rows
            .into_iter()
            .map(|row| {
                let status = row
                    .status
                    .parse::<BookingStatus>()
                    .map_err(BookingQueryError::DatabaseError)?;
                Ok(StatusStat {
                    status,
                    total_bookings: row.total_bookings,
                    total_amount: row.total_amount,
                })
            })
            .collect::<Result<Vec<_>, BookingQueryError>>()?;

        let by_month = month_rows
            .into_iter()
            .map(|row| {
                let month = u32::try_from(row.month)
                    .map_err(|e| BookingQueryError::DatabaseError(e.to_string()))?;
                Ok(MonthlyStat {
                    year: row.year,
                    month,
                    total_bookings: row.total_bookings,
                })
            })
            .collect::<Result<Vec<_>, BookingQueryError>>()?;

        Ok(BookingStats {
            by_status,
            by_month,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_domain(model: bookings::Model) -> Result<Booking, BookingQueryError> {
    bookings::to_domain(model).map_err(BookingQueryError::DatabaseError)
}

fn map_db_err(e: DbErr) -> BookingQueryError {
    BookingQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
