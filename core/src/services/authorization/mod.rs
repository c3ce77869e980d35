//! Declarative authorization policy.
//!
//! Every protected operation runs the same three checks, in order, over
//! already-loaded data (no I/O):
//!
//! 1. Is there a principal at all? No → `Unauthenticated`.
//! 2. Does the principal's role set intersect the operation's accepted
//!    roles? No → `InsufficientPermissions`.
//! 3. For ownership-scoped operations, does the principal's id match the
//!    resource's owning id? No → `InsufficientPermissions`.
//!
//! Services call these functions with the request-scoped [`Principal`]
//! handed down from the authentication middleware.

use uuid::Uuid;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError, DomainResult};

/// Rejects anonymous requests.
pub fn require_authenticated(principal: Option<&Principal>) -> DomainResult<&Principal> {
    principal.ok_or(DomainError::Auth(AuthError::Unauthenticated))
}

/// Rejects anonymous requests and principals lacking all of the accepted
/// roles.
pub fn require_any_role<'a>(
    principal: Option<&'a Principal>,
    accepted: &[Role],
) -> DomainResult<&'a Principal> {
    let principal = require_authenticated(principal)?;
    if principal.has_any_role(accepted) {
        Ok(principal)
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}

/// Rejects principals that do not own the resource identified by `owner_id`.
pub fn require_owner(principal: &Principal, owner_id: Uuid) -> DomainResult<()> {
    if principal.is_owner_of(owner_id) {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}
