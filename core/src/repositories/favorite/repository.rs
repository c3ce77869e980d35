//! Favorite repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::DomainError;

/// Repository trait for saved-listing persistence.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Favorites saved by the given user.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError>;

    /// The favorite linking a user to a property, if any.
    async fn find_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError>;

    /// Persist a new favorite.
    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError>;

    /// Remove the favorite linking a user to a property.
    ///
    /// # Returns
    /// * `Ok(true)` - Favorite was removed
    /// * `Ok(false)` - No such favorite
    async fn delete_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<bool, DomainError>;
}
