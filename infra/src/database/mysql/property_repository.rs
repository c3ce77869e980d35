//! MySQL implementation of the PropertyRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rems_core::domain::entities::property::{Property, PropertyFilter, PropertyType};
use rems_core::errors::DomainError;
use rems_core::repositories::PropertyRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of PropertyRepository.
///
/// Image URL lists are stored as JSON text in the `images` column.
pub struct MySqlPropertyRepository {
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn images_to_column(images: &[String]) -> Result<String, DomainError> {
        serde_json::to_string(images).map_err(|e| DomainError::Internal {
            message: format!("serialize image list: {}", e),
        })
    }

    fn row_to_property(row: &sqlx::mysql::MySqlRow) -> Result<Property, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("read properties.id", e))?;
        let agent_id: String = row
            .try_get("agent_id")
            .map_err(|e| db_error("read properties.agent_id", e))?;
        let property_type: String = row
            .try_get("property_type")
            .map_err(|e| db_error("read properties.property_type", e))?;
        let images: String = row
            .try_get("images")
            .map_err(|e| db_error("read properties.images", e))?;

        Ok(Property {
            id: parse_uuid(&id)?,
            agent_id: parse_uuid(&agent_id)?,
            title: row
                .try_get("title")
                .map_err(|e| db_error("read properties.title", e))?,
            description: row
                .try_get("description")
                .map_err(|e| db_error("read properties.description", e))?,
            price: row
                .try_get("price")
                .map_err(|e| db_error("read properties.price", e))?,
            location: row
                .try_get("location")
                .map_err(|e| db_error("read properties.location", e))?,
            property_type: PropertyType::parse(&property_type).ok_or_else(|| {
                DomainError::Database {
                    message: format!("unknown property type tag: {}", property_type),
                }
            })?,
            images: serde_json::from_str(&images).map_err(|e| DomainError::Database {
                message: format!("invalid image list in row: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("read properties.created_at", e))?,
        })
    }
}

const PROPERTY_COLUMNS: &str =
    "id, agent_id, title, description, price, location, property_type, images, created_at";

#[async_trait]
impl PropertyRepository for MySqlPropertyRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties WHERE id = ? LIMIT 1",
            PROPERTY_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find property by id", e))?;

        row.as_ref().map(Self::row_to_property).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties ORDER BY created_at DESC",
            PROPERTY_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list properties", e))?;

        rows.iter().map(Self::row_to_property).collect()
    }

    async fn search(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError> {
        // Criteria are ANDed; the text criterion matches title or location.
        let mut query = format!("SELECT {} FROM properties WHERE 1 = 1", PROPERTY_COLUMNS);
        if filter.text.is_some() {
            query.push_str(" AND (LOWER(title) LIKE ? OR LOWER(location) LIKE ?)");
        }
        if filter.min_price.is_some() {
            query.push_str(" AND price >= ?");
        }
        if filter.max_price.is_some() {
            query.push_str(" AND price <= ?");
        }
        if filter.property_type.is_some() {
            query.push_str(" AND property_type = ?");
        }
        query.push_str(" ORDER BY created_at DESC");

        let mut q = sqlx::query(&query);
        if let Some(ref text) = filter.text {
            let pattern = format!("%{}%", text.to_lowercase());
            q = q.bind(pattern.clone()).bind(pattern);
        }
        if let Some(min) = filter.min_price {
            q = q.bind(min);
        }
        if let Some(max) = filter.max_price {
            q = q.bind(max);
        }
        if let Some(property_type) = filter.property_type {
            q = q.bind(property_type.as_str());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("search properties", e))?;

        rows.iter().map(Self::row_to_property).collect()
    }

    async fn find_by_agent(&self, agent_id: Uuid) -> Result<Vec<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties WHERE agent_id = ? ORDER BY created_at DESC",
            PROPERTY_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(agent_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list properties by agent", e))?;

        rows.iter().map(Self::row_to_property).collect()
    }

    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            INSERT INTO properties (id, agent_id, title, description, price, location, property_type, images, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(property.id.to_string())
            .bind(property.agent_id.to_string())
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price)
            .bind(&property.location)
            .bind(property.property_type.as_str())
            .bind(Self::images_to_column(&property.images)?)
            .bind(property.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("insert property", e))?;

        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            UPDATE properties
            SET title = ?, description = ?, price = ?, location = ?, property_type = ?, images = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price)
            .bind(&property.location)
            .bind(property.property_type.as_str())
            .bind(Self::images_to_column(&property.images)?)
            .bind(property.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update property", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "property".to_string(),
            });
        }
        Ok(property)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete property", e))?;

        Ok(result.rows_affected() > 0)
    }
}
