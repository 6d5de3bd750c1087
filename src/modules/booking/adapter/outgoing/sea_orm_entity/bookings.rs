use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::booking::application::domain::entities::{
    Booking, BookingStatus, BookingType, RentalPeriod,
};
use crate::modules::property::adapter::outgoing::sea_orm_entity::properties;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub property_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    /// "rent" | "sale"
    #[sea_orm(column_type = "Text")]
    pub booking_type: String,

    #[sea_orm(nullable)]
    pub start_date: Option<Date>,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    #[sea_orm(column_type = "Double")]
    pub booked_price: f64,

    /// "pending" | "confirmed" | "cancelled" | "completed"
    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "properties::Entity",
        from = "Column::PropertyId",
        to = "properties::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Properties,

    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

/// Rebuilds the domain booking from a row. Fails only on values the table
/// constraints should have rejected.
pub fn to_domain(model: Model) -> Result<Booking, String> {
    let booking_type = model.booking_type.parse::<BookingType>()?;
    let status = model.status.parse::<BookingStatus>()?;

    let period = match (booking_type, model.start_date, model.end_date) {
        (BookingType::Rent, Some(start_date), Some(end_date)) => Some(RentalPeriod {
            start_date,
            end_date,
        }),
        (BookingType::Rent, _, _) => {
            return Err(format!("rent booking {} has no rental period", model.id))
        }
        (BookingType::Sale, _, _) => None,
    };

    Ok(Booking {
        id: model.id,
        property_id: model.property_id,
        user: UserId::from(model.user_id),
        booking_type,
        period,
        booked_price: model.booked_price,
        status,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
