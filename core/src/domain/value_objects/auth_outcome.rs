//! Result of a successful login.

use crate::domain::entities::user::User;

/// Everything a successful login produces: the bearer token, its lifetime,
/// and the authenticated user record.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Signed bearer token
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: i64,

    /// The authenticated user (hash never serialized)
    pub user: User,
}
