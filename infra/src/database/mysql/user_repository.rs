//! MySQL implementation of the UserRepository trait.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rems_core::domain::entities::user::{Role, User};
use rems_core::errors::{AuthError, DomainError};
use rems_core::repositories::UserRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of UserRepository.
///
/// Ids are stored as CHAR(36) and roles as a comma-separated list of
/// lowercase tags.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn roles_to_column(roles: &HashSet<Role>) -> String {
        let mut tags: Vec<&str> = roles.iter().map(Role::as_str).collect();
        tags.sort_unstable();
        tags.join(",")
    }

    fn roles_from_column(column: &str) -> HashSet<Role> {
        column.split(',').filter_map(Role::parse).collect()
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("read users.id", e))?;
        let roles: String = row
            .try_get("roles")
            .map_err(|e| db_error("read users.roles", e))?;

        Ok(User {
            id: parse_uuid(&id)?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("read users.email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("read users.password_hash", e))?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("read users.name", e))?,
            roles: Self::roles_from_column(&roles),
            enabled: row
                .try_get("enabled")
                .map_err(|e| db_error("read users.enabled", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("read users.created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("read users.updated_at", e))?,
        })
    }
}

const USER_COLUMNS: &str =
    "id, email, password_hash, name, roles, enabled, created_at, updated_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY created_at DESC",
            USER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count users by email", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| db_error("read user count", e))?;
        Ok(count > 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, email, password_hash, name, roles, enabled, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(Self::roles_to_column(&user.roles))
            .bind(user.enabled)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            // Unique index on email
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::EmailAlreadyRegistered.into())
            }
            Err(e) => Err(db_error("insert user", e)),
        }
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, password_hash = ?, name = ?, roles = ?, enabled = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(Self::roles_to_column(&user.roles))
            .bind(user.enabled)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_column() {
        let roles: HashSet<Role> = [Role::Agent, Role::Customer].into_iter().collect();
        let column = MySqlUserRepository::roles_to_column(&roles);
        assert_eq!(column, "agent,customer");
        assert_eq!(MySqlUserRepository::roles_from_column(&column), roles);
    }

    #[test]
    fn unknown_role_tags_are_dropped() {
        let roles = MySqlUserRepository::roles_from_column("customer,superuser");
        assert_eq!(roles, [Role::Customer].into_iter().collect());
    }
}
