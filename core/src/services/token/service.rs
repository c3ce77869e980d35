//! Token issuance and validation.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and validates signed, time-limited bearer tokens.
///
/// The service is stateless: a token's validity is a pure function of the
/// configured secret and the server clock. There is no server-side
/// revocation; expiry is the only way a token dies.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from its configuration.
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        // No clock-skew compensation: a token is invalid the instant its
        // expiry timestamp is reached.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for the given subject.
    ///
    /// The expiry is issue time plus the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, DomainError> {
        let claims = Claims::new(
            subject,
            &self.config.issuer,
            self.config.token_lifetime_seconds,
        );
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Validates a token and returns its claims.
    ///
    /// Fails with a distinct reason for expiry, signature mismatch, and
    /// malformed input; callers treat all three as unauthenticated.
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;
        Ok(token_data.claims)
    }

    /// Seconds a freshly issued token stays valid.
    pub fn lifetime_seconds(&self) -> i64 {
        self.config.token_lifetime_seconds
    }
}
