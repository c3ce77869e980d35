//! MySQL implementation of the FavoriteRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rems_core::domain::entities::favorite::Favorite;
use rems_core::errors::DomainError;
use rems_core::repositories::FavoriteRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of FavoriteRepository.
pub struct MySqlFavoriteRepository {
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_favorite(row: &sqlx::mysql::MySqlRow) -> Result<Favorite, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("read favorites.id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| db_error("read favorites.user_id", e))?;
        let property_id: String = row
            .try_get("property_id")
            .map_err(|e| db_error("read favorites.property_id", e))?;

        Ok(Favorite {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            property_id: parse_uuid(&property_id)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("read favorites.created_at", e))?,
        })
    }
}

const FAVORITE_COLUMNS: &str = "id, user_id, property_id, created_at";

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError> {
        let query = format!(
            "SELECT {} FROM favorites WHERE user_id = ? ORDER BY created_at DESC",
            FAVORITE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list favorites by user", e))?;

        rows.iter().map(Self::row_to_favorite).collect()
    }

    async fn find_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError> {
        let query = format!(
            "SELECT {} FROM favorites WHERE user_id = ? AND property_id = ? LIMIT 1",
            FAVORITE_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(property_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find favorite", e))?;

        row.as_ref().map(Self::row_to_favorite).transpose()
    }

    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError> {
        let query = r#"
            INSERT INTO favorites (id, user_id, property_id, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(favorite.id.to_string())
            .bind(favorite.user_id.to_string())
            .bind(favorite.property_id.to_string())
            .bind(favorite.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("insert favorite", e))?;

        Ok(favorite)
    }

    async fn delete_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND property_id = ?")
            .bind(user_id.to_string())
            .bind(property_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete favorite", e))?;

        Ok(result.rows_affected() > 0)
    }
}
