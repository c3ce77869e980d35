//! JWT claims for the session token.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
///
/// A token is a self-contained signed assertion of `{subject, issued-at,
/// expiry}`. Nothing about it is persisted server-side; validity is purely a
/// function of the signature and the `exp` timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,

    /// Issued-at timestamp (epoch seconds)
    pub iat: i64,

    /// Expiry timestamp (epoch seconds)
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for a token issued now with the given lifetime.
    pub fn new(subject: &str, issuer: &str, lifetime_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_seconds);
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// Checks whether the claims have expired per this machine's clock.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
