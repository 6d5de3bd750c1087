use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::Booking;
use crate::modules::property::application::domain::entities::{
    Property, PropertyLocation, PropertyType,
};
use crate::modules::property::application::ports::outgoing::{
    AgentBookingView, BookerView, PropertyQuery, PropertyQueryError, PropertyRepository,
    PropertyRepositoryError,
};

pub fn sample_property(agent: UserId) -> Property {
    let now = Utc::now();
    Property {
        id: Uuid::new_v4(),
        agent,
        title: "Seaside apartment".to_string(),
        description: "Two bedrooms facing the bay".to_string(),
        price: 1200.0,
        location: PropertyLocation {
            city: "Valencia".to_string(),
            district: Some("Cabanyal".to_string()),
            address: None,
        },
        bedrooms: 2,
        bathrooms: 1,
        area: 74.5,
        property_type: PropertyType::Apartment,
        status: "for_rent".to_string(),
        image: None,
        likes: Vec::new(),
        views_count: 0,
        is_purchased: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_booker(id: UserId) -> BookerView {
    BookerView {
        id,
        email: "buyer@example.com".to_string(),
        first_name: "Dana".to_string(),
        last_name: "Reyes".to_string(),
    }
}

#[derive(Default)]
struct StoreState {
    properties: Vec<Property>,
    bookings: Vec<Booking>,
    users: HashMap<UserId, BookerView>,
}

/// Property read and write ports over shared in-memory vectors.
#[derive(Clone, Default)]
pub struct InMemoryPropertyStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryPropertyStore {
    pub fn add_property(&self, property: Property) {
        self.state.lock().unwrap().properties.push(property);
    }

    pub fn add_booking(&self, booking: Booking) {
        self.state.lock().unwrap().bookings.push(booking);
    }

    pub fn add_user(&self, user: BookerView) {
        self.state.lock().unwrap().users.insert(user.id, user);
    }

    pub fn property(&self, id: Uuid) -> Option<Property> {
        self.state
            .lock()
            .unwrap()
            .properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn booking(&self, id: Uuid) -> Option<Booking> {
        self.state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }
}

#[async_trait]
impl PropertyQuery for InMemoryPropertyStore {
    async fn get_by_id(&self, property_id: Uuid) -> Result<Property, PropertyQueryError> {
        self.property(property_id)
            .ok_or(PropertyQueryError::NotFound)
    }

    async fn find_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, PropertyQueryError> {
        Ok(self.booking(booking_id))
    }

    async fn list_available(&self) -> Result<Vec<Property>, PropertyQueryError> {
        let state = self.state.lock().unwrap();

        let mut available: Vec<Property> = state
            .properties
            .iter()
            .filter(|p| p.is_listable())
            .filter(|p| {
                !state
                    .bookings
                    .iter()
                    .any(|b| b.property_id == p.id && b.status.is_active())
            })
            .cloned()
            .collect();

        available.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(available)
    }

    async fn list_agent_property_ids(
        &self,
        agent: UserId,
    ) -> Result<Vec<Uuid>, PropertyQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .properties
            .iter()
            .filter(|p| p.is_agent(agent))
            .map(|p| p.id)
            .collect())
    }

    async fn list_bookings_for_properties(
        &self,
        property_ids: Vec<Uuid>,
    ) -> Result<Vec<AgentBookingView>, PropertyQueryError> {
        let state = self.state.lock().unwrap();

        let mut views: Vec<AgentBookingView> = state
            .bookings
            .iter()
            .filter(|b| property_ids.contains(&b.property_id))
            .map(|b| AgentBookingView {
                booking: b.clone(),
                property_title: state
                    .properties
                    .iter()
                    .find(|p| p.id == b.property_id)
                    .map(|p| p.title.clone())
                    .unwrap_or_default(),
                booker: state.users.get(&b.user).cloned(),
            })
            .collect();

        views.sort_by(|a, b| b.booking.created_at.cmp(&a.booking.created_at));
        Ok(views)
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyStore {
    async fn mark_purchased(&self, property_id: Uuid) -> Result<Property, PropertyRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let property = state
            .properties
            .iter_mut()
            .find(|p| p.id == property_id)
            .ok_or(PropertyRepositoryError::NotFound)?;

        property.is_purchased = true;
        property.updated_at = Utc::now();
        Ok(property.clone())
    }

    async fn toggle_like(
        &self,
        property_id: Uuid,
        user: UserId,
    ) -> Result<Property, PropertyRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let property = state
            .properties
            .iter_mut()
            .find(|p| p.id == property_id)
            .ok_or(PropertyRepositoryError::NotFound)?;

        if property.is_liked_by(user) {
            property.likes.retain(|u| *u != user);
        } else {
            property.likes.push(user);
        }
        Ok(property.clone())
    }
}
