use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use rems_core::domain::entities::user::Role;
use rems_core::services::user::UserUpdate;

/// Body for PUT /api/v1/users/{id}.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    /// Role tags replacing the account's current set
    pub roles: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

impl UpdateUserRequest {
    /// Parses the requested role tags, rejecting unknown ones.
    pub fn parse_roles(&self) -> Result<Option<HashSet<Role>>, String> {
        self.roles
            .as_deref()
            .map(crate::dto::parse_role_tags)
            .transpose()
    }

    /// Converts into the domain update, with roles already parsed.
    pub fn into_update(self, roles: Option<HashSet<Role>>) -> UserUpdate {
        UserUpdate {
            name: self.name,
            roles,
            enabled: self.enabled,
        }
    }
}
