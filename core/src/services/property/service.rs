//! Property listing service.
//!
//! Reads are public; mutations require the `agent` role, and updating or
//! deleting a listing additionally requires owning it.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::property::{Property, PropertyFilter, PropertyType, PropertyUpdate};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PropertyRepository;
use crate::services::authorization;

/// Fields required to create a listing.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub location: String,
    pub property_type: PropertyType,
    pub images: Vec<String>,
}

/// Service for property listing use cases.
pub struct PropertyService<P: PropertyRepository> {
    property_repository: Arc<P>,
}

impl<P: PropertyRepository> PropertyService<P> {
    pub fn new(property_repository: Arc<P>) -> Self {
        Self {
            property_repository,
        }
    }

    /// All listings, or the matching subset when the filter has criteria.
    pub async fn list(&self, filter: &PropertyFilter) -> DomainResult<Vec<Property>> {
        if filter.is_empty() {
            self.property_repository.find_all().await
        } else {
            self.property_repository.search(filter).await
        }
    }

    /// A single listing by id.
    pub async fn get(&self, id: Uuid) -> DomainResult<Property> {
        self.property_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "property".to_string(),
            })
    }

    /// Listings owned by the given agent.
    pub async fn by_agent(&self, agent_id: Uuid) -> DomainResult<Vec<Property>> {
        self.property_repository.find_by_agent(agent_id).await
    }

    /// Creates a listing owned by the acting agent.
    pub async fn create(
        &self,
        principal: Option<&Principal>,
        new_property: NewProperty,
    ) -> DomainResult<Property> {
        let principal = authorization::require_any_role(principal, &[Role::Agent])?;

        let property = Property::new(
            principal.user_id,
            new_property.title,
            new_property.description,
            new_property.price,
            new_property.location,
            new_property.property_type,
            new_property.images,
        );
        self.property_repository.create(property).await
    }

    /// Applies a partial update to a listing the acting agent owns.
    pub async fn update(
        &self,
        principal: Option<&Principal>,
        id: Uuid,
        update: PropertyUpdate,
    ) -> DomainResult<Property> {
        let principal = authorization::require_any_role(principal, &[Role::Agent])?;

        let mut property = self.get(id).await?;
        authorization::require_owner(principal, property.agent_id)?;

        property.apply_update(update);
        self.property_repository.update(property).await
    }

    /// Deletes a listing the acting agent owns.
    pub async fn delete(&self, principal: Option<&Principal>, id: Uuid) -> DomainResult<()> {
        let principal = authorization::require_any_role(principal, &[Role::Agent])?;

        let property = self.get(id).await?;
        authorization::require_owner(principal, property.agent_id)?;

        self.property_repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AuthError;
    use crate::repositories::property::MockPropertyRepository;

    fn service() -> PropertyService<MockPropertyRepository> {
        PropertyService::new(Arc::new(MockPropertyRepository::new()))
    }

    fn principal_with(roles: &[Role]) -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            email: "agent@x.com".to_string(),
            roles: roles.iter().copied().collect(),
        }
    }

    fn listing() -> NewProperty {
        NewProperty {
            title: "Cottage".to_string(),
            description: None,
            price: 250_000.0,
            location: "Springfield".to_string(),
            property_type: PropertyType::Buy,
            images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn create_requires_agent_role() {
        let properties = service();

        let result = properties.create(None, listing()).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::Unauthenticated))
        ));

        let customer = principal_with(&[Role::Customer]);
        let result = properties.create(Some(&customer), listing()).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));
    }

    #[tokio::test]
    async fn create_records_acting_agent_as_owner() {
        let properties = service();
        let agent = principal_with(&[Role::Agent]);

        let created = properties.create(Some(&agent), listing()).await.unwrap();
        assert_eq!(created.agent_id, agent.user_id);

        let fetched = properties.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_rejects_non_owner_agent() {
        let properties = service();
        let owner = principal_with(&[Role::Agent]);
        let other_agent = principal_with(&[Role::Agent]);

        let created = properties.create(Some(&owner), listing()).await.unwrap();

        let update = PropertyUpdate {
            price: Some(240_000.0),
            ..Default::default()
        };
        let result = properties
            .update(Some(&other_agent), created.id, update)
            .await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));
    }

    #[tokio::test]
    async fn owner_can_update_and_delete() {
        let properties = service();
        let owner = principal_with(&[Role::Agent]);
        let created = properties.create(Some(&owner), listing()).await.unwrap();

        let update = PropertyUpdate {
            title: Some("Bigger Cottage".to_string()),
            ..Default::default()
        };
        let updated = properties
            .update(Some(&owner), created.id, update)
            .await
            .unwrap();
        assert_eq!(updated.title, "Bigger Cottage");

        properties.delete(Some(&owner), created.id).await.unwrap();
        let result = properties.get(created.id).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn list_is_public_and_filters() {
        let properties = service();
        let agent = principal_with(&[Role::Agent]);
        properties.create(Some(&agent), listing()).await.unwrap();
        properties
            .create(
                Some(&agent),
                NewProperty {
                    title: "Downtown Loft".to_string(),
                    price: 1800.0,
                    property_type: PropertyType::Rent,
                    ..listing()
                },
            )
            .await
            .unwrap();

        let all = properties.list(&PropertyFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let rentals = properties
            .list(&PropertyFilter {
                property_type: Some(PropertyType::Rent),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(rentals.len(), 1);
        assert_eq!(rentals[0].title, "Downtown Loft");
    }
}
