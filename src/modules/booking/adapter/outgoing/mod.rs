pub mod booking_query_postgres;
pub mod booking_repository_postgres;
pub mod sea_orm_entity;

pub use booking_query_postgres::BookingQueryPostgres;
pub use booking_repository_postgres::BookingRepositoryPostgres;
