use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rems_core::domain::entities::user::{Role, User};

/// Body for POST /api/v1/auth/register.
///
/// Password strength beyond the minimum length is enforced by the auth
/// service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    /// Role tags to grant instead of the default role
    pub roles: Option<Vec<String>>,
}

/// Body for POST /api/v1/auth/login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Body for PUT /api/v1/auth/me.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User payload without credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub roles: Vec<String>,
    pub enabled: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let mut roles: Vec<String> = user.roles.iter().map(|r| r.to_string()).collect();
        roles.sort_unstable();
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            roles,
            enabled: user.enabled,
            created_at: user.created_at,
        }
    }
}

impl RegisterRequest {
    /// Parses the requested role tags, rejecting unknown ones.
    pub fn parse_roles(&self) -> Result<Option<std::collections::HashSet<Role>>, String> {
        self.roles
            .as_deref()
            .map(crate::dto::parse_role_tags)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_validates_email_and_password_length() {
        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "Secret1!".to_string(),
            name: None,
            roles: None,
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "short".to_string(),
            name: None,
            roles: None,
        };
        assert!(short_password.validate().is_err());

        let ok = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "Secret1!".to_string(),
            name: None,
            roles: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn parse_roles_rejects_unknown_tags() {
        let request = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "Secret1!".to_string(),
            name: None,
            roles: Some(vec!["agent".to_string(), "superuser".to_string()]),
        };
        assert!(request.parse_roles().is_err());
    }

    #[test]
    fn user_response_carries_sorted_role_tags() {
        let user = User::new(
            "a@x.com".to_string(),
            "hash".to_string(),
            None,
            [Role::Customer, Role::Agent].into_iter().collect(),
        );
        let response = UserResponse::from(user);
        assert_eq!(response.roles, vec!["agent", "customer"]);
    }
}
