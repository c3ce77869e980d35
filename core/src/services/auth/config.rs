//! Configuration for the authentication service

use crate::domain::entities::user::Role;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Role assigned when a registration requests none
    pub default_role: Role,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            default_role: Role::Customer,
        }
    }
}
