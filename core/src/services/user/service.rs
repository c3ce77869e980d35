//! Account administration service.
//!
//! Admins manage the account pool: listing accounts, changing granted
//! roles, disabling or re-enabling an account, and deleting one. Regular
//! users touch only their own profile through the auth service.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::authorization;

const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Partial update applied by an admin to an account.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub roles: Option<HashSet<Role>>,
    pub enabled: Option<bool>,
}

/// Service for admin-only account administration.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Every account in the system. Admin only.
    pub async fn list(&self, principal: Option<&Principal>) -> DomainResult<Vec<User>> {
        authorization::require_any_role(principal, ADMIN_ONLY)?;
        self.user_repository.find_all().await
    }

    /// A single account by id. Admin only.
    pub async fn get(&self, principal: Option<&Principal>, id: Uuid) -> DomainResult<User> {
        authorization::require_any_role(principal, ADMIN_ONLY)?;
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "user".to_string(),
            })
    }

    /// Applies an admin update to an account. Admin only.
    ///
    /// A provided role set must not be empty; an account always carries at
    /// least one role.
    pub async fn update(
        &self,
        principal: Option<&Principal>,
        id: Uuid,
        update: UserUpdate,
    ) -> DomainResult<User> {
        authorization::require_any_role(principal, ADMIN_ONLY)?;

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "user".to_string(),
            })?;

        if let Some(name) = update.name {
            user.set_name(name);
        }
        if let Some(roles) = update.roles {
            if roles.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "roles".to_string(),
                }
                .into());
            }
            user.set_roles(roles);
        }
        match update.enabled {
            Some(true) => user.enable(),
            Some(false) => {
                user.disable();
                tracing::info!(user_id = %user.id, "account disabled");
            }
            None => {}
        }

        self.user_repository.update(user).await
    }

    /// Removes an account. Admin only.
    pub async fn delete(&self, principal: Option<&Principal>, id: Uuid) -> DomainResult<()> {
        authorization::require_any_role(principal, ADMIN_ONLY)?;

        if !self.user_repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }
        tracing::info!(user_id = %id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AuthError;
    use crate::repositories::user::MockUserRepository;

    fn principal_with(roles: &[Role]) -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            email: "admin@x.com".to_string(),
            roles: roles.iter().copied().collect(),
        }
    }

    fn account(email: &str) -> User {
        User::new(
            email.to_string(),
            "hash".to_string(),
            None,
            [Role::Customer].into_iter().collect(),
        )
    }

    async fn fixture_with(accounts: &[&str]) -> (UserService<MockUserRepository>, Vec<User>) {
        let repo = Arc::new(MockUserRepository::new());
        let mut created = Vec::new();
        for email in accounts {
            created.push(repo.create(account(email)).await.unwrap());
        }
        (UserService::new(repo), created)
    }

    #[tokio::test]
    async fn administration_is_admin_only() {
        let (users, created) = fixture_with(&["a@x.com"]).await;
        let customer = principal_with(&[Role::Customer]);

        let result = users.list(Some(&customer)).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));

        let result = users.get(Some(&customer), created[0].id).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));

        let result = users.list(None).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::Unauthenticated))
        ));
    }

    #[tokio::test]
    async fn admin_lists_and_fetches_accounts() {
        let (users, created) = fixture_with(&["a@x.com", "b@x.com"]).await;
        let admin = principal_with(&[Role::Admin]);

        let all = users.list(Some(&admin)).await.unwrap();
        assert_eq!(all.len(), 2);

        let fetched = users.get(Some(&admin), created[0].id).await.unwrap();
        assert_eq!(fetched.email, "a@x.com");

        let result = users.get(Some(&admin), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn update_changes_roles_and_disables_the_account() {
        let (users, created) = fixture_with(&["a@x.com"]).await;
        let admin = principal_with(&[Role::Admin]);

        let updated = users
            .update(
                Some(&admin),
                created[0].id,
                UserUpdate {
                    roles: Some([Role::Agent].into_iter().collect()),
                    enabled: Some(false),
                    ..UserUpdate::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.has_role(Role::Agent));
        assert!(!updated.has_role(Role::Customer));
        assert!(!updated.enabled);

        let reenabled = users
            .update(
                Some(&admin),
                created[0].id,
                UserUpdate {
                    enabled: Some(true),
                    ..UserUpdate::default()
                },
            )
            .await
            .unwrap();
        assert!(reenabled.enabled);
    }

    #[tokio::test]
    async fn empty_role_set_is_rejected() {
        let (users, created) = fixture_with(&["a@x.com"]).await;
        let admin = principal_with(&[Role::Admin]);

        let result = users
            .update(
                Some(&admin),
                created[0].id,
                UserUpdate {
                    roles: Some(HashSet::new()),
                    ..UserUpdate::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::InvalidValue { .. }))
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_account() {
        let (users, created) = fixture_with(&["a@x.com"]).await;
        let admin = principal_with(&[Role::Admin]);

        users.delete(Some(&admin), created[0].id).await.unwrap();
        assert!(users.list(Some(&admin)).await.unwrap().is_empty());

        let result = users.delete(Some(&admin), created[0].id).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
