use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::property::application::domain::entities::{
    Property, PropertyImage, PropertyLocation, PropertyType,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub agent_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    #[sea_orm(column_type = "Text")]
    pub city: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub district: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,

    pub bedrooms: i32,
    pub bathrooms: i32,

    #[sea_orm(column_type = "Double")]
    pub area: f64,

    #[sea_orm(column_type = "Text")]
    pub property_type: String,

    /// Free-form listing status; "for_sale" and "for_rent" make it listable.
    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_public_id: Option<String>,

    pub views_count: i32,
    pub is_purchased: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::AgentId",
        to = "users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Agent,

    #[sea_orm(has_many = "super::property_likes::Entity")]
    PropertyLikes,

    #[sea_orm(has_many = "crate::modules::booking::adapter::outgoing::sea_orm_entity::bookings::Entity")]
    Bookings,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::property_likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyLikes.def()
    }
}

impl Related<crate::modules::booking::adapter::outgoing::sea_orm_entity::bookings::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Bookings.def()
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

/// Rebuilds the domain property from a row and its like rows.
pub fn to_domain(model: Model, likes: Vec<UserId>) -> Result<Property, String> {
    let property_type = model.property_type.parse::<PropertyType>()?;

    let image = model.image_url.map(|url| PropertyImage {
        url,
        public_id: model.image_public_id,
    });

    Ok(Property {
        id: model.id,
        agent: UserId::from(model.agent_id),
        title: model.title,
        description: model.description,
        price: model.price,
        location: PropertyLocation {
            city: model.city,
            district: model.district,
            address: model.address,
        },
        bedrooms: model.bedrooms,
        bathrooms: model.bathrooms,
        area: model.area,
        property_type,
        status: model.status,
        image,
        likes,
        views_count: model.views_count,
        is_purchased: model.is_purchased,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
