use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PropertyLikes::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(PropertyLikes::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PropertyLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_property_likes")
                            .col(PropertyLikes::PropertyId)
                            .col(PropertyLikes::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_likes_property_id")
                            .from(PropertyLikes::Table, PropertyLikes::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_likes_user_id")
                            .from(PropertyLikes::Table, PropertyLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookup: properties a user liked
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_property_likes_user_id
                ON property_likes (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyLikes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PropertyLikes {
    Table,
    PropertyId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
