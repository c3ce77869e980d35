//! Main authentication service implementation.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::AuthOutcome;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::authorization;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Service for the register/login/profile flow.
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    password_hasher: PasswordHasher,
    token_service: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: PasswordHasher,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Registers a new user.
    ///
    /// Validates the email and password, rejects duplicate emails, hashes
    /// the password, and persists the user with either the requested roles
    /// or the configured default role.
    ///
    /// # Errors
    ///
    /// * `ValidationError::InvalidEmail` / `WeakPassword` - bad input
    /// * `AuthError::EmailAlreadyRegistered` - email already present
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<String>,
        requested_roles: Option<HashSet<Role>>,
    ) -> DomainResult<User> {
        if !rems_shared::utils::validation::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !rems_shared::utils::validation::is_strong_password(password) {
            return Err(ValidationError::WeakPassword.into());
        }

        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let roles = match requested_roles {
            Some(roles) if !roles.is_empty() => roles,
            _ => [self.config.default_role].into_iter().collect(),
        };

        let user = self
            .user_repository
            .create(User::new(email.to_string(), password_hash, name, roles))
            .await?;

        tracing::info!(user_id = %user.id, "registered new user");
        Ok(user)
    }

    /// Authenticates a user and mints a bearer token.
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - no account for that email
    /// * `AuthError::AccountDisabled` - account exists but is disabled
    /// * `AuthError::InvalidCredentials` - password mismatch
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthOutcome> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if !user.enabled {
            tracing::warn!(user_id = %user.id, "login attempt on disabled account");
            return Err(AuthError::AccountDisabled.into());
        }

        if !self.password_hasher.verify(password, &user.password_hash)? {
            tracing::warn!(user_id = %user.id, "login failed: bad password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(&user.email)?;
        Ok(AuthOutcome {
            token,
            expires_in: self.token_service.lifetime_seconds(),
            user,
        })
    }

    /// Loads the acting user's own record.
    pub async fn current_user(&self, principal: Option<&Principal>) -> DomainResult<User> {
        let principal = authorization::require_authenticated(principal)?;
        self.user_repository
            .find_by_email(&principal.email)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "user".to_string(),
            })
    }

    /// Updates the acting user's profile. The password, when provided, is
    /// re-validated and re-hashed.
    pub async fn update_profile(
        &self,
        principal: Option<&Principal>,
        name: Option<String>,
        password: Option<String>,
    ) -> DomainResult<User> {
        let mut user = self.current_user(principal).await?;

        if let Some(name) = name {
            if !name.is_empty() {
                user.set_name(name);
            }
        }
        if let Some(password) = password {
            if !rems_shared::utils::validation::is_strong_password(&password) {
                return Err(ValidationError::WeakPassword.into());
            }
            user.set_password_hash(self.password_hasher.hash(&password)?);
        }

        self.user_repository.update(user).await
    }
}
