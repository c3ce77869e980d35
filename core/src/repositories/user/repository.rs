//! User repository trait defining the interface for credential persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations.
///
/// Implementations handle the actual database access while keeping the
/// domain layer free of storage concerns. Concurrent updates to the same
/// identity are last-write-wins at the storage layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// All users, newest first.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user.
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
