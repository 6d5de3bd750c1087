use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Needed for `property_id WITH =` inside a gist exclusion constraint
        manager
            .get_connection()
            .execute_unprepared("CREATE EXTENSION IF NOT EXISTS btree_gist;")
            .await?;

        // =====================================================
        // Create bookings table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Bookings::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::UserId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::BookingType).text().not_null())
                    .col(ColumnDef::new(Bookings::StartDate).date())
                    .col(ColumnDef::new(Bookings::EndDate).date())
                    .col(ColumnDef::new(Bookings::BookedPrice).double().not_null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .text()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_property_id")
                            .from(Bookings::Table, Bookings::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user_id")
                            .from(Bookings::Table, Bookings::UserId)
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

        // Rent bookings carry an ordered date pair, sale bookings carry none
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE bookings
                ADD CONSTRAINT bookings_type_dates_check CHECK (
                    (booking_type = 'rent'
                        AND start_date IS NOT NULL
                        AND end_date IS NOT NULL
                        AND start_date <= end_date)
                    OR
                    (booking_type = 'sale'
                        AND start_date IS NULL
                        AND end_date IS NULL)
                );
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE bookings
                ADD CONSTRAINT bookings_status_check
                CHECK (status IN ('pending', 'confirmed', 'cancelled', 'completed'));
                "#,
            )
            .await?;

        // One sale booking per property, cancelled ones included
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_bookings_sale_property_unique
                ON bookings (property_id)
                WHERE booking_type = 'sale';
                "#,
            )
            .await?;

        // Inclusive ranges: touching end and start dates overlap
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE bookings
                ADD CONSTRAINT bookings_no_overlapping_rent
                EXCLUDE USING gist (
                    property_id WITH =,
                    daterange(start_date, end_date, '[]') WITH &&
                )
                WHERE (booking_type = 'rent' AND status IN ('pending', 'confirmed'));
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_user_id
                ON bookings (user_id, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_property_status
                ON bookings (property_id, status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_created_at
                ON bookings (created_at DESC);
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
                CREATE TRIGGER update_bookings_updated_at
                BEFORE UPDATE ON bookings
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
                DROP TRIGGER IF EXISTS update_bookings_updated_at ON bookings;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_bookings_sale_property_unique;
                DROP INDEX IF EXISTS idx_bookings_user_id;
                DROP INDEX IF EXISTS idx_bookings_property_status;
                DROP INDEX IF EXISTS idx_bookings_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    PropertyId,
    UserId,
    BookingType,
    StartDate,
    EndDate,
    BookedPrice,
    Status,
    CreatedAt,
    UpdatedAt,
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
