pub mod jwt;
pub mod sea_orm_entity;
