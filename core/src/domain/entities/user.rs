//! User entity representing a registered account in the REMS system.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role label granting access to a set of operations.
///
/// Roles are the canonical authorization unit: a user carries a set of them
/// and every protected operation declares which roles it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    Owner,
    Customer,
    Tenant,
}

impl Role {
    /// Returns the lowercase tag used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Owner => "owner",
            Role::Customer => "customer",
            Role::Tenant => "tenant",
        }
    }

    /// Parses a role tag, case-insensitively. Unknown tags yield `None`.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "agent" => Some(Role::Agent),
            "owner" => Some(Role::Owner),
            "customer" => Some(Role::Customer),
            "tenant" => Some(Role::Tenant),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique email address, used as the token subject
    pub email: String,

    /// Bcrypt hash of the password. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Display name
    pub name: Option<String>,

    /// Set of role tags granted to this user
    pub roles: HashSet<Role>,

    /// Whether the account may authenticate
    pub enabled: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new enabled user with the given credentials and roles.
    pub fn new(
        email: String,
        password_hash: String,
        name: Option<String>,
        roles: HashSet<Role>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            roles,
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the user carries the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Replaces the password hash.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Updates the display name.
    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
        self.updated_at = Utc::now();
    }

    /// Replaces the granted role set.
    pub fn set_roles(&mut self, roles: HashSet<Role>) {
        self.roles = roles;
        self.updated_at = Utc::now();
    }

    /// Disables the account, preventing future logins.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.updated_at = Utc::now();
    }

    /// Re-enables the account.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(list: &[Role]) -> HashSet<Role> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_user_is_enabled() {
        let user = User::new(
            "a@x.com".to_string(),
            "$2b$12$hash".to_string(),
            None,
            roles(&[Role::Customer]),
        );
        assert!(user.enabled);
        assert!(user.has_role(Role::Customer));
        assert!(!user.has_role(Role::Agent));
    }

    #[test]
    fn disable_and_enable_toggle_flag() {
        let mut user = User::new(
            "a@x.com".to_string(),
            "hash".to_string(),
            None,
            roles(&[Role::Agent]),
        );
        user.disable();
        assert!(!user.enabled);
        user.enable();
        assert!(user.enabled);
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User::new(
            "a@x.com".to_string(),
            "super-secret-hash".to_string(),
            Some("Alice".to_string()),
            roles(&[Role::Customer]),
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(Role::parse("AGENT"), Some(Role::Agent));
        assert_eq!(Role::parse("customer"), Some(Role::Customer));
        assert_eq!(Role::parse(" admin "), Some(Role::Admin));
        assert_eq!(Role::parse("client"), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"agent\"");
        assert_eq!(Role::Tenant.to_string(), "tenant");
    }
}
