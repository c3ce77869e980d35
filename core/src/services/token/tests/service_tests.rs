//! Tests for token issuance and validation.

use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn config_with(secret: &str, lifetime_seconds: i64) -> TokenServiceConfig {
    TokenServiceConfig {
        secret: secret.to_string(),
        token_lifetime_seconds: lifetime_seconds,
        issuer: "rems".to_string(),
    }
}

#[test]
fn issued_token_validates_immediately() {
    let service = TokenService::new(config_with("test-secret", 3600));

    let token = service.issue("a@x.com").unwrap();
    assert!(!token.is_empty());

    let claims = service.validate(&token).unwrap();
    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn expired_token_fails_with_expired() {
    // Negative lifetime puts the expiry in the past at issue time.
    let service = TokenService::new(config_with("test-secret", -1));

    let token = service.issue("a@x.com").unwrap();
    let result = service.validate(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn token_signed_with_different_key_fails() {
    let issuer = TokenService::new(config_with("key-one", 3600));
    let validator = TokenService::new(config_with("key-two", 3600));

    let token = issuer.issue("a@x.com").unwrap();
    let result = validator.validate(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn garbage_token_fails_as_malformed() {
    let service = TokenService::new(config_with("test-secret", 3600));

    for garbage in ["", "not-a-jwt", "aaa.bbb.ccc"] {
        let result = service.validate(garbage);
        assert!(
            matches!(result, Err(DomainError::Token(TokenError::InvalidTokenFormat))),
            "expected malformed failure for {garbage:?}"
        );
    }
}

#[test]
fn token_from_other_issuer_is_rejected() {
    let issuer = TokenService::new(TokenServiceConfig {
        secret: "test-secret".to_string(),
        token_lifetime_seconds: 3600,
        issuer: "someone-else".to_string(),
    });
    let validator = TokenService::new(config_with("test-secret", 3600));

    let token = issuer.issue("a@x.com").unwrap();
    assert!(validator.validate(&token).is_err());
}

#[test]
fn lifetime_is_exposed_for_responses() {
    let service = TokenService::new(config_with("test-secret", 1234));
    assert_eq!(service.lifetime_seconds(), 1234);
}
