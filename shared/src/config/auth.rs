//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token lifetime in seconds
    pub token_lifetime_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            token_lifetime_seconds: 3600,
            issuer: "rems".to_string(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Reads `JWT_SECRET` and `JWT_LIFETIME_SECONDS` from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            token_lifetime_seconds: std::env::var("JWT_LIFETIME_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_lifetime_seconds),
            issuer: defaults.issuer,
        }
    }

    /// Set the token lifetime in seconds.
    pub fn with_lifetime_seconds(mut self, seconds: i64) -> Self {
        self.token_lifetime_seconds = seconds;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
