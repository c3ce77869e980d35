//! Request-scoped authenticated identity.

use std::collections::HashSet;

use uuid::Uuid;

use super::user::{Role, User};

/// The authenticated identity and role set attached to one request's
/// processing lifetime.
///
/// A `Principal` is reconstructed per request by the authentication
/// middleware from a validated token subject and the credential store. It is
/// passed explicitly into the services that need it; there is no process-wide
/// security context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Identifier of the underlying user record
    pub user_id: Uuid,

    /// Email the token was issued for
    pub email: String,

    /// Roles loaded from the credential store at request time
    pub roles: HashSet<Role>,
}

impl Principal {
    /// Builds a principal from a loaded user record.
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            roles: user.roles.clone(),
        }
    }

    /// Checks whether the principal carries the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Checks whether the principal carries any of the given roles.
    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        allowed.iter().any(|role| self.roles.contains(role))
    }

    /// Checks whether the principal is the owner identified by `owner_id`.
    pub fn is_owner_of(&self, owner_id: Uuid) -> bool {
        self.user_id == owner_id
    }
}
