//! Saved-listing service.
//!
//! Favorites belong to customers; every operation requires the `customer`
//! role and acts on the caller's own list.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::principal::Principal;
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{FavoriteRepository, PropertyRepository};
use crate::services::authorization;

/// Service for saved-listing use cases.
pub struct FavoriteService<F: FavoriteRepository, P: PropertyRepository> {
    favorite_repository: Arc<F>,
    property_repository: Arc<P>,
}

impl<F: FavoriteRepository, P: PropertyRepository> FavoriteService<F, P> {
    pub fn new(favorite_repository: Arc<F>, property_repository: Arc<P>) -> Self {
        Self {
            favorite_repository,
            property_repository,
        }
    }

    /// Saves a listing to the acting customer's favorites.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - the listing does not exist
    /// * `ValidationError::DuplicateValue` - already saved
    pub async fn add(
        &self,
        principal: Option<&Principal>,
        property_id: Uuid,
    ) -> DomainResult<Favorite> {
        let principal = authorization::require_any_role(principal, &[Role::Customer])?;

        if self
            .property_repository
            .find_by_id(property_id)
            .await?
            .is_none()
        {
            return Err(DomainError::NotFound {
                resource: "property".to_string(),
            });
        }

        if self
            .favorite_repository
            .find_by_user_and_property(principal.user_id, property_id)
            .await?
            .is_some()
        {
            return Err(ValidationError::DuplicateValue {
                field: "property_id".to_string(),
            }
            .into());
        }

        self.favorite_repository
            .create(Favorite::new(principal.user_id, property_id))
            .await
    }

    /// The acting customer's saved listings.
    pub async fn list(&self, principal: Option<&Principal>) -> DomainResult<Vec<Favorite>> {
        let principal = authorization::require_any_role(principal, &[Role::Customer])?;
        self.favorite_repository.find_by_user(principal.user_id).await
    }

    /// Removes a listing from the acting customer's favorites.
    pub async fn remove(
        &self,
        principal: Option<&Principal>,
        property_id: Uuid,
    ) -> DomainResult<()> {
        let principal = authorization::require_any_role(principal, &[Role::Customer])?;

        let removed = self
            .favorite_repository
            .delete_by_user_and_property(principal.user_id, property_id)
            .await?;
        if !removed {
            return Err(DomainError::NotFound {
                resource: "favorite".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::property::{Property, PropertyType};
    use crate::errors::AuthError;
    use crate::repositories::favorite::MockFavoriteRepository;
    use crate::repositories::property::MockPropertyRepository;

    struct Fixture {
        favorites: FavoriteService<MockFavoriteRepository, MockPropertyRepository>,
        property_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let properties = Arc::new(MockPropertyRepository::new());
        let property = properties
            .create(Property::new(
                Uuid::new_v4(),
                "Cottage".to_string(),
                None,
                250_000.0,
                "Springfield".to_string(),
                PropertyType::Buy,
                Vec::new(),
            ))
            .await
            .unwrap();
        Fixture {
            favorites: FavoriteService::new(Arc::new(MockFavoriteRepository::new()), properties),
            property_id: property.id,
        }
    }

    fn customer() -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            email: "customer@x.com".to_string(),
            roles: [Role::Customer].into_iter().collect(),
        }
    }

    #[tokio::test]
    async fn add_list_remove_round_trip() {
        let f = fixture().await;
        let user = customer();

        let favorite = f.favorites.add(Some(&user), f.property_id).await.unwrap();
        assert_eq!(favorite.property_id, f.property_id);

        let list = f.favorites.list(Some(&user)).await.unwrap();
        assert_eq!(list.len(), 1);

        f.favorites.remove(Some(&user), f.property_id).await.unwrap();
        assert!(f.favorites.list(Some(&user)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_requires_customer_role() {
        let f = fixture().await;

        let result = f.favorites.add(None, f.property_id).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::Unauthenticated))
        ));

        let agent = Principal {
            user_id: Uuid::new_v4(),
            email: "agent@x.com".to_string(),
            roles: [Role::Agent].into_iter().collect(),
        };
        let result = f.favorites.add(Some(&agent), f.property_id).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));
    }

    #[tokio::test]
    async fn add_rejects_unknown_listing_and_duplicates() {
        let f = fixture().await;
        let user = customer();

        let result = f.favorites.add(Some(&user), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        f.favorites.add(Some(&user), f.property_id).await.unwrap();
        let result = f.favorites.add(Some(&user), f.property_id).await;
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::DuplicateValue { .. }))
        ));
    }

    #[tokio::test]
    async fn remove_missing_favorite_is_not_found() {
        let f = fixture().await;
        let user = customer();

        let result = f.favorites.remove(Some(&user), f.property_id).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn lists_are_scoped_per_user() {
        let f = fixture().await;
        let alice = customer();
        let bob = customer();

        f.favorites.add(Some(&alice), f.property_id).await.unwrap();

        assert!(f.favorites.list(Some(&bob)).await.unwrap().is_empty());
    }
}
