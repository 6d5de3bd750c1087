pub mod properties;
pub mod property_likes;
