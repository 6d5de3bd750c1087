use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::booking::adapter::outgoing::sea_orm_entity::bookings;
use crate::modules::booking::application::domain::entities::{Booking, BookingStatus};
use crate::modules::property::adapter::outgoing::sea_orm_entity::{properties, property_likes};
use crate::modules::property::application::domain::entities::{Property, LISTABLE_STATUSES};
use crate::modules::property::application::ports::outgoing::{
    AgentBookingView, BookerView, PropertyQuery, PropertyQueryError,
};

#[derive(Clone)]
pub struct PropertyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn attach_likes(
        &self,
        models: Vec<properties::Model>,
    ) -> Result<Vec<Property>, PropertyQueryError> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut likes = property_likes::likes_by_property(&*self.db, ids)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|model| {
                let liked_by = likes.remove(&model.id).unwrap_or_default();
                properties::to_domain(model, liked_by).map_err(PropertyQueryError::DatabaseError)
            })
            .collect()
    }
}

#[async_trait]
impl PropertyQuery for PropertyQueryPostgres {
    async fn get_by_id(&self, property_id: Uuid) -> Result<Property, PropertyQueryError> {
        let model = properties::Entity::find_by_id(property_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PropertyQueryError::NotFound)?;

        self.attach_likes(vec![model])
            .await?
            .pop()
            .ok_or(PropertyQueryError::NotFound)
    }

    async fn find_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, PropertyQueryError> {
        let model = bookings::Entity::find_by_id(booking_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(bookings::to_domain)
            .transpose()
            .map_err(PropertyQueryError::DatabaseError)
    }

    async fn list_available(&self) -> Result<Vec<Property>, PropertyQueryError> {
        let holding: Vec<&str> = BookingStatus::HOLDS_PROPERTY
            .iter()
            .map(|s| s.as_str())
            .collect();

        let held = Query::select()
            .column(bookings::Column::PropertyId)
            .from(bookings::Entity)
            .and_where(bookings::Column::Status.is_in(holding))
            .to_owned();

        let models = properties::Entity::find()
            .filter(properties::Column::Status.is_in(LISTABLE_STATUSES))
            .filter(properties::Column::Id.not_in_subquery(held))
            .order_by_desc(properties::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.attach_likes(models).await
    }

    async fn list_agent_property_ids(
        &self,
        agent: UserId,
    ) -> Result<Vec<Uuid>, PropertyQueryError> {
        let agent_id: Uuid = agent.into();

        properties::Entity::find()
            .select_only()
            .column(properties::Column::Id)
            .filter(properties::Column::AgentId.eq(agent_id))
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list_bookings_for_properties(
        &self,
        property_ids: Vec<Uuid>,
    ) -> Result<Vec<AgentBookingView>, PropertyQueryError> {
        if property_ids.is_empty() {
            return Ok(Vec::new());
        }

        let booking_models = bookings::Entity::find()
            .filter(bookings::Column::PropertyId.is_in(property_ids.clone()))
            .order_by_desc(bookings::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if booking_models.is_empty() {
            return Ok(Vec::new());
        }

        let titles: HashMap<Uuid, String> = properties::Entity::find()
            .select_only()
            .column(properties::Column::Id)
            .column(properties::Column::Title)
            .filter(properties::Column::Id.is_in(property_ids))
            .into_tuple::<(Uuid, String)>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .collect();

        let booker_ids: Vec<Uuid> = booking_models.iter().map(|b| b.user_id).collect();
        let bookers: HashMap<Uuid, BookerView> = users::Entity::find()
            .filter(users::Column::Id.is_in(booker_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    BookerView {
                        id: UserId::from(u.id),
                        email: u.email,
                        first_name: u.first_name,
                        last_name: u.last_name,
                    },
                )
            })
            .collect();

        booking_models
            .into_iter()
            .map(|model| {
                let property_title = titles.get(&model.property_id).cloned().unwrap_or_default();
                let booker = bookers.get(&model.user_id).cloned();
                let booking =
                    bookings::to_domain(model).map_err(PropertyQueryError::DatabaseError)?;

                Ok(AgentBookingView {
                    booking,
                    property_title,
                    booker,
                })
            })
            .collect()
    }
}

fn map_db_err(e: DbErr) -> PropertyQueryError {
    PropertyQueryError::DatabaseError(e.to_string())
}
