//! Domain error to HTTP response mapping.

use std::collections::HashMap;

use actix_web::HttpResponse;

use rems_core::errors::{AuthError, DomainError, TokenError, ValidationError};

use crate::dto::ErrorResponse;

/// Converts a domain error into the HTTP response for it.
///
/// Storage and internal failures are logged with detail but answered with
/// an opaque 500 so internals never leak to clients.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::ValidationErr(validation_error) => {
            handle_validation_error(validation_error)
        }
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error".to_string(), message),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found".to_string(),
            format!("{} not found", resource),
        )),
        DomainError::Database { message } => {
            tracing::error!("database error: {}", message);
            internal_error()
        }
        DomainError::Internal { message } => {
            tracing::error!("internal error: {}", message);
            internal_error()
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    let message = error.to_string();
    match error {
        AuthError::EmailAlreadyRegistered => HttpResponse::BadRequest().json(
            ErrorResponse::new("email_already_registered".to_string(), message),
        ),
        AuthError::UserNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
            "user_not_found".to_string(),
            message,
        )),
        AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_credentials".to_string(),
            message,
        )),
        AuthError::AccountDisabled => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "account_disabled".to_string(),
            message,
        )),
        AuthError::Unauthenticated => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "authentication_required".to_string(),
            message,
        )),
        AuthError::InsufficientPermissions => HttpResponse::Forbidden().json(ErrorResponse::new(
            "insufficient_permissions".to_string(),
            message,
        )),
    }
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    let message = error.to_string();
    match error {
        TokenError::TokenExpired => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "token_expired".to_string(),
            message,
        )),
        TokenError::InvalidTokenFormat => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_token".to_string(),
            message,
        )),
        TokenError::InvalidSignature => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_signature".to_string(),
            message,
        )),
        TokenError::TokenGenerationFailed => {
            tracing::error!("token generation failed");
            internal_error()
        }
    }
}

fn handle_validation_error(error: ValidationError) -> HttpResponse {
    let message = error.to_string();
    let code = match error {
        ValidationError::InvalidEmail => "invalid_email",
        ValidationError::WeakPassword => "weak_password",
        ValidationError::InvalidValue { .. } => "invalid_value",
        ValidationError::DuplicateValue { .. } => "duplicate_value",
    };
    HttpResponse::BadRequest().json(ErrorResponse::new(code.to_string(), message))
}

/// Rejects a request whose body failed DTO validation.
pub fn validation_failure(errors: validator::ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    details.insert("validation_errors".to_string(), serde_json::json!(errors));

    HttpResponse::BadRequest().json(
        ErrorResponse::new(
            "validation_error".to_string(),
            "Invalid request data".to_string(),
        )
        .with_details(details),
    )
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "internal_error".to_string(),
        "An internal error occurred".to_string(),
    ))
}
