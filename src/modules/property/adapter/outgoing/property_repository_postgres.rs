use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::property::adapter::outgoing::sea_orm_entity::{properties, property_likes};
use crate::modules::property::application::domain::entities::Property;
use crate::modules::property::application::ports::outgoing::{
    PropertyRepository, PropertyRepositoryError,
};

#[derive(Clone)]
pub struct PropertyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn with_likes(
        &self,
        model: properties::Model,
    ) -> Result<Property, PropertyRepositoryError> {
        let likes = property_likes::likes_by_property(&*self.db, vec![model.id])
            .await
            .map_err(map_db_err)?
            .remove(&model.id)
            .unwrap_or_default();

        properties::to_domain(model, likes).map_err(PropertyRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryPostgres {
    async fn mark_purchased(&self, property_id: Uuid) -> Result<Property, PropertyRepositoryError> {
        let model = properties::ActiveModel {
            is_purchased: Set(true),
            ..Default::default()
        };

        let updated = properties::Entity::update_many()
            .set(model)
            .filter(properties::Column::Id.eq(property_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(PropertyRepositoryError::NotFound)?;

        self.with_likes(updated).await
    }

    async fn toggle_like(
        &self,
        property_id: Uuid,
        user: UserId,
    ) -> Result<Property, PropertyRepositoryError> {
        let user_id: Uuid = user.into();

        let property = properties::Entity::find_by_id(property_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PropertyRepositoryError::NotFound)?;

        let removed = property_likes::Entity::delete_many()
            .filter(property_likes::Column::PropertyId.eq(property_id))
            .filter(property_likes::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if removed.rows_affected == 0 {
            let like = property_likes::ActiveModel {
                property_id: Set(property_id),
                user_id: Set(user_id),
                created_at: Set(Utc::now().fixed_offset()),
            };

            // A concurrent like from the same user lands on the primary key and is ignored
            property_likes::Entity::insert(like)
                .on_conflict(
                    OnConflict::columns([
                        property_likes::Column::PropertyId,
                        property_likes::Column::UserId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&*self.db)
                .await
                .map_err(map_db_err)?;

            tracing::debug!(%property_id, %user_id, "Property liked");
        } else {
            tracing::debug!(%property_id, %user_id, "Property unliked");
        }

        self.with_likes(property).await
    }
}

fn map_db_err(e: DbErr) -> PropertyRepositoryError {
    PropertyRepositoryError::DatabaseError(e.to_string())
}
