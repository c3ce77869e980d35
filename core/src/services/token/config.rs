//! Configuration for the token service

use rems_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,

    /// Token lifetime in seconds
    pub token_lifetime_seconds: i64,

    /// Issuer claim embedded in every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        JwtConfig::default().into()
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            token_lifetime_seconds: config.token_lifetime_seconds,
            issuer: config.issuer,
        }
    }
}
