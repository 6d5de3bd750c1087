use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Listing statuses that make a property eligible for the availability listing.
pub const LISTABLE_STATUSES: [&str; 2] = ["for_sale", "for_rent"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    #[default]
    Apartment,
    Land,
    Commercial,
    Other,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Villa => "villa",
            PropertyType::Apartment => "apartment",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Other => "other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "villa" => Ok(PropertyType::Villa),
            "apartment" => Ok(PropertyType::Apartment),
            "land" => Ok(PropertyType::Land),
            "commercial" => Ok(PropertyType::Commercial),
            "other" => Ok(PropertyType::Other),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyLocation {
    pub city: String,
    pub district: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub url: String,
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub agent: UserId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: PropertyLocation,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: String,
    pub image: Option<PropertyImage>,
    pub likes: Vec<UserId>,
    pub views_count: i32,
    pub is_purchased: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn is_agent(&self, user: UserId) -> bool {
        self.agent == user
    }

    pub fn is_liked_by(&self, user: UserId) -> bool {
        self.likes.contains(&user)
    }

    pub fn is_listable(&self) -> bool {
        LISTABLE_STATUSES.contains(&self.status.as_str())
    }
}
