//! Tests for the register/login flow.

use std::sync::Arc;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::user::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

/// bcrypt's minimum cost; the `bcrypt::MIN_COST` constant is private in 0.15.
const MIN_COST: u32 = 4;

fn service() -> AuthService<MockUserRepository> {
    service_with_repo(Arc::new(MockUserRepository::new()))
}

fn service_with_repo(repo: Arc<MockUserRepository>) -> AuthService<MockUserRepository> {
    let token_config = TokenServiceConfig {
        secret: "test-secret".to_string(),
        token_lifetime_seconds: 3600,
        issuer: "rems".to_string(),
    };
    AuthService::new(
        repo,
        PasswordHasher::with_cost(MIN_COST),
        Arc::new(TokenService::new(token_config)),
        AuthServiceConfig::default(),
    )
}

#[tokio::test]
async fn register_then_login_succeeds() {
    let auth = service();

    let user = auth
        .register("a@x.com", "Secret1!", None, None)
        .await
        .unwrap();
    assert!(user.has_role(Role::Customer));
    assert!(user.enabled);

    let outcome = auth.login("a@x.com", "Secret1!").await.unwrap();
    assert!(!outcome.token.is_empty());
    assert_eq!(outcome.expires_in, 3600);
    assert_eq!(outcome.user.id, user.id);
}

#[tokio::test]
async fn register_assigns_requested_roles() {
    let auth = service();

    let roles = [Role::Agent].into_iter().collect();
    let user = auth
        .register("agent@x.com", "Secret1!", Some("Agent".to_string()), Some(roles))
        .await
        .unwrap();
    assert!(user.has_role(Role::Agent));
    assert!(!user.has_role(Role::Customer));
}

#[tokio::test]
async fn duplicate_email_fails_regardless_of_password() {
    let auth = service();
    auth.register("a@x.com", "Secret1!", None, None)
        .await
        .unwrap();

    let result = auth.register("a@x.com", "Another2@", None, None).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn register_rejects_bad_input() {
    let auth = service();

    let result = auth.register("not-an-email", "Secret1!", None, None).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let result = auth.register("a@x.com", "weak", None, None).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::WeakPassword))
    ));
}

#[tokio::test]
async fn login_unknown_email_is_not_found() {
    let auth = service();
    let result = auth.login("ghost@x.com", "Secret1!").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn login_wrong_password_is_invalid_credentials() {
    let auth = service();
    auth.register("a@x.com", "Secret1!", None, None)
        .await
        .unwrap();

    let result = auth.login("a@x.com", "Wrong999!").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn login_disabled_account_fails_even_with_correct_password() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service_with_repo(Arc::clone(&repo));

    let mut user = auth
        .register("a@x.com", "Secret1!", None, None)
        .await
        .unwrap();
    user.disable();
    repo.update(user).await.unwrap();

    let result = auth.login("a@x.com", "Secret1!").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountDisabled))
    ));
}

#[tokio::test]
async fn current_user_requires_a_principal() {
    let auth = service();
    let result = auth.current_user(None).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::Unauthenticated))
    ));
}

#[tokio::test]
async fn update_profile_changes_name_and_password() {
    let auth = service();
    let user = auth
        .register("a@x.com", "Secret1!", None, None)
        .await
        .unwrap();
    let principal = Principal::from_user(&user);

    let updated = auth
        .update_profile(
            Some(&principal),
            Some("Alice".to_string()),
            Some("NewPass1!".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("Alice"));

    // Old password no longer works, new one does.
    assert!(matches!(
        auth.login("a@x.com", "Secret1!").await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(auth.login("a@x.com", "NewPass1!").await.is_ok());
}
