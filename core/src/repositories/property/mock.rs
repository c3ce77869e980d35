//! In-memory implementation of PropertyRepository for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::property::{Property, PropertyFilter};
use crate::errors::DomainError;

use super::repository::PropertyRepository;

/// Mock property repository backed by a `HashMap`.
#[derive(Default)]
pub struct MockPropertyRepository {
    properties: Arc<RwLock<HashMap<Uuid, Property>>>,
}

impl MockPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        let mut all: Vec<Property> = properties.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn search(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        let mut matched: Vec<Property> = properties
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn find_by_agent(&self, agent_id: Uuid) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties
            .values()
            .filter(|p| p.agent_id == agent_id)
            .cloned()
            .collect())
    }

    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        if !properties.contains_key(&property.id) {
            return Err(DomainError::NotFound {
                resource: "property".to_string(),
            });
        }
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut properties = self.properties.write().await;
        Ok(properties.remove(&id).is_some())
    }
}
