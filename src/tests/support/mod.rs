pub mod app_state_builder;
pub mod auth_helper;
pub mod booking_fixtures;
pub mod property_fixtures;
pub mod stubs;
