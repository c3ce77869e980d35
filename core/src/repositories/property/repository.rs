//! Property repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::property::{Property, PropertyFilter};
use crate::errors::DomainError;

/// Repository trait for property listing persistence.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Find a listing by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError>;

    /// All listings, newest first.
    async fn find_all(&self) -> Result<Vec<Property>, DomainError>;

    /// Listings matching the given filter.
    async fn search(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError>;

    /// Listings owned by the given agent.
    async fn find_by_agent(&self, agent_id: Uuid) -> Result<Vec<Property>, DomainError>;

    /// Persist a new listing.
    async fn create(&self, property: Property) -> Result<Property, DomainError>;

    /// Update an existing listing.
    async fn update(&self, property: Property) -> Result<Property, DomainError>;

    /// Delete a listing.
    ///
    /// # Returns
    /// * `Ok(true)` - Listing was deleted
    /// * `Ok(false)` - Listing not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
