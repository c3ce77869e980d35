//! Error type definitions for authentication, token management, and
//! validation. Messages are terse; the presentation layer decides what is
//! safe to surface.

use thiserror::Error;

/// Authentication and authorization errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token validation and issuance errors
///
/// Callers treat every validation variant identically as "unauthenticated";
/// the distinction exists for logging.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password does not meet the strength policy")]
    WeakPassword,

    #[error("Invalid value for field: {field}")]
    InvalidValue { field: String },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },
}
