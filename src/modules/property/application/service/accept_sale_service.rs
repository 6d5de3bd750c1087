use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::booking::application::domain::entities::BookingType;
use crate::modules::property::application::domain::entities::Property;
use crate::modules::property::application::ports::incoming::use_cases::{
    AcceptSaleError, AcceptSaleUseCase,
};
use crate::modules::property::application::ports::outgoing::{
    PropertyQuery, PropertyQueryError, PropertyRepository, PropertyRepositoryError,
};

pub struct AcceptSaleService<Q, R>
where
    Q: PropertyQuery,
    R: PropertyRepository,
{
    property_query: Q,
    property_repository: R,
}

impl<Q, R> AcceptSaleService<Q, R>
where
    Q: PropertyQuery,
    R: PropertyRepository,
{
    pub fn new(property_query: Q, property_repository: R) -> Self {
        Self {
            property_query,
            property_repository,
        }
    }
}

#[async_trait]
impl<Q, R> AcceptSaleUseCase for AcceptSaleService<Q, R>
where
    Q: PropertyQuery + Send + Sync,
    R: PropertyRepository + Send + Sync,
{
    async fn execute(&self, booking_id: Uuid, actor: UserId) -> Result<Property, AcceptSaleError> {
        let booking = self
            .property_query
            .find_booking(booking_id)
            .await
            .map_err(|e| AcceptSaleError::RepositoryError(e.to_string()))?
            .ok_or(AcceptSaleError::BookingNotFound)?;

        let property = self
            .property_query
            .get_by_id(booking.property_id)
            .await
            .map_err(|e| match e {
                PropertyQueryError::NotFound => AcceptSaleError::PropertyNotFound,
                PropertyQueryError::DatabaseError(msg) => AcceptSaleError::RepositoryError(msg),
            })?;

        if booking.booking_type != BookingType::Sale {
            return Err(AcceptSaleError::NotSaleBooking);
        }

        if !property.is_agent(actor) {
            return Err(AcceptSaleError::Forbidden);
        }

        let purchased = self
            .property_repository
            .mark_purchased(property.id)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => AcceptSaleError::PropertyNotFound,
                PropertyRepositoryError::DatabaseError(msg) => {
                    AcceptSaleError::RepositoryError(msg)
                }
            })?;

        tracing::info!(
            property_id = %purchased.id,
            booking_id = %booking.id,
            "Sale accepted, property marked as purchased"
        );

        Ok(purchased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::booking::application::domain::entities::BookingStatus;
    use crate::tests::support::booking_fixtures::{sample_rent_booking, sample_sale_booking};
    use crate::tests::support::property_fixtures::{sample_property, InMemoryPropertyStore};

    fn setup_sale() -> (InMemoryPropertyStore, Uuid, UserId, Uuid) {
        let agent = UserId::from(Uuid::new_v4());
        let property = sample_property(agent);
        let mut booking = sample_sale_booking();
        booking.property_id = property.id;

        let store = InMemoryPropertyStore::default();
        let property_id = property.id;
        let booking_id = booking.id;
        store.add_property(property);
        store.add_booking(booking);

        (store, booking_id, agent, property_id)
    }

    #[tokio::test]
    async fn test_agent_accepts_sale() {
        let (store, booking_id, agent, property_id) = setup_sale();
        let service = AcceptSaleService::new(store.clone(), store.clone());

        let property = service.execute(booking_id, agent).await.unwrap();

        assert_eq!(property.id, property_id);
        assert!(property.is_purchased);
        // booking untouched
        assert_eq!(
            store.booking(booking_id).unwrap().status,
            BookingStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_non_agent_forbidden_and_property_unchanged() {
        let (store, booking_id, _agent, property_id) = setup_sale();
        let service = AcceptSaleService::new(store.clone(), store.clone());

        let res = service
            .execute(booking_id, UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(res.unwrap_err(), AcceptSaleError::Forbidden);
        assert!(!store.property(property_id).unwrap().is_purchased);
    }

    #[tokio::test]
    async fn test_rent_booking_rejected() {
        let agent = UserId::from(Uuid::new_v4());
        let property = sample_property(agent);
        let mut booking = sample_rent_booking();
        booking.property_id = property.id;
        let booking_id = booking.id;

        let store = InMemoryPropertyStore::default();
        store.add_property(property);
        store.add_booking(booking);

        let service = AcceptSaleService::new(store.clone(), store);
        let res = service.execute(booking_id, agent).await;

        assert_eq!(res.unwrap_err(), AcceptSaleError::NotSaleBooking);
    }

    #[tokio::test]
    async fn test_unknown_booking() {
        let store = InMemoryPropertyStore::default();
        let service = AcceptSaleService::new(store.clone(), store);

        let res = service
            .execute(Uuid::new_v4(), UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(res.unwrap_err(), AcceptSaleError::BookingNotFound);
    }

    #[tokio::test]
    async fn test_booking_on_missing_property() {
        let booking = sample_sale_booking();
        let booking_id = booking.id;

        let store = InMemoryPropertyStore::default();
        store.add_booking(booking);

        let service = AcceptSaleService::new(store.clone(), store);
        let res = service
            .execute(booking_id, UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(res.unwrap_err(), AcceptSaleError::PropertyNotFound);
    }
}
