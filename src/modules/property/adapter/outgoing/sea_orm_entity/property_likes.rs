use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::auth::application::domain::entities::UserId;

/// One row per (property, user) like. The composite primary key keeps likes a set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "property_likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub property_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::properties::Entity",
        from = "Column::PropertyId",
        to = "super::properties::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Properties,
}

impl Related<super::properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Likers of each of `property_ids`, oldest like first.
pub async fn likes_by_property<C>(
    db: &C,
    property_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, Vec<UserId>>, DbErr>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<Uuid, Vec<UserId>> = HashMap::new();
    if property_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = Entity::find()
        .filter(Column::PropertyId.is_in(property_ids))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?;

    for row in rows {
        grouped
            .entry(row.property_id)
            .or_default()
            .push(UserId::from(row.user_id));
    }

    Ok(grouped)
}
