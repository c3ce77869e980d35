//! Booking repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::DomainError;

/// Repository trait for visit booking persistence.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// All bookings.
    async fn find_all(&self) -> Result<Vec<Booking>, DomainError>;

    /// Bookings made by the given user.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError>;

    /// Bookings for the given property.
    async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, DomainError>;

    /// Bookings in the given status.
    async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, DomainError>;

    /// Persist a new booking.
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Update an existing booking.
    async fn update(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Delete a booking.
    ///
    /// # Returns
    /// * `Ok(true)` - Booking was deleted
    /// * `Ok(false)` - Booking not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
