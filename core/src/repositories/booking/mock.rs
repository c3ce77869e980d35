//! In-memory implementation of BookingRepository for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::DomainError;

use super::repository::BookingRepository;

/// Mock booking repository backed by a `HashMap`.
#[derive(Default)]
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.values().cloned().collect())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.property_id == property_id)
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.status == status)
            .cloned()
            .collect())
    }

    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::NotFound {
                resource: "booking".to_string(),
            });
        }
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.remove(&id).is_some())
    }
}
