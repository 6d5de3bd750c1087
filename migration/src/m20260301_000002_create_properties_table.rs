use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create properties table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Properties::AgentId).uuid().not_null())
                    .col(ColumnDef::new(Properties::Title).text().not_null())
                    .col(ColumnDef::new(Properties::Description).text().not_null())
                    .col(ColumnDef::new(Properties::Price).double().not_null())
                    .col(ColumnDef::new(Properties::City).text().not_null())
                    .col(ColumnDef::new(Properties::District).text())
                    .col(ColumnDef::new(Properties::Address).text())
                    .col(
                        ColumnDef::new(Properties::Bedrooms)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Properties::Bathrooms)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Properties::Area)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Properties::PropertyType)
                            .text()
                            .not_null()
                            .default("apartment"),
                    )
                    .col(
                        ColumnDef::new(Properties::Status)
                            .text()
                            .not_null()
                            .default("for_sale"),
                    )
                    .col(ColumnDef::new(Properties::ImageUrl).text())
                    .col(ColumnDef::new(Properties::ImagePublicId).text())
                    .col(
                        ColumnDef::new(Properties::ViewsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Properties::IsPurchased)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_agent_id")
                            .from(Properties::Table, Properties::AgentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Constraints
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE properties
                ADD CONSTRAINT properties_values_check CHECK (
                    price >= 0 AND bedrooms >= 0 AND bathrooms >= 0 AND area >= 0
                );
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE properties
                ADD CONSTRAINT properties_type_check
                CHECK (property_type IN ('villa', 'apartment', 'land', 'commercial', 'other'));
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Agent dashboard lookups
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_properties_agent_id
                ON properties (agent_id);
                "#,
            )
            .await?;

        // Availability listing filters on status
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_properties_status
                ON properties (status);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_properties_updated_at
                BEFORE UPDATE ON properties
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_properties_updated_at ON properties;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_properties_agent_id;
                DROP INDEX IF EXISTS idx_properties_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    AgentId,
    Title,
    Description,
    Price,
    City,
    District,
    Address,
    Bedrooms,
    Bathrooms,
    Area,
    PropertyType,
    Status,
    ImageUrl,
    ImagePublicId,
    ViewsCount,
    IsPurchased,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
