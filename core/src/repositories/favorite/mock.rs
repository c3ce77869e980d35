//! In-memory implementation of FavoriteRepository for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::DomainError;

use super::repository::FavoriteRepository;

/// Mock favorite repository backed by a `HashMap`.
#[derive(Default)]
pub struct MockFavoriteRepository {
    favorites: Arc<RwLock<HashMap<Uuid, Favorite>>>,
}

impl MockFavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .find(|f| f.user_id == user_id && f.property_id == property_id)
            .cloned())
    }

    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError> {
        let mut favorites = self.favorites.write().await;
        favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn delete_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        let id = favorites
            .values()
            .find(|f| f.user_id == user_id && f.property_id == property_id)
            .map(|f| f.id);
        match id {
            Some(id) => Ok(favorites.remove(&id).is_some()),
            None => Ok(false),
        }
    }
}
