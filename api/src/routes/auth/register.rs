use actix_web::{web, HttpResponse};
use validator::Validate;

use rems_core::errors::ValidationError;
use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::auth_dto::{RegisterRequest, UserResponse};
use crate::handlers::error::{handle_domain_error, validation_failure};

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account. The password must be at least 8 characters with
/// a letter, a digit, and a special character. When no roles are requested
/// the account gets the default customer role.
///
/// # Responses
/// - 201 Created: account created, returns the user without credentials
/// - 400 Bad Request: invalid email, weak password, unknown role tag, or
///   email already registered
pub async fn register<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure(errors);
    }

    let roles = match request.parse_roles() {
        Ok(roles) => roles,
        Err(_) => {
            return handle_domain_error(
                ValidationError::InvalidValue {
                    field: "roles".to_string(),
                }
                .into(),
            );
        }
    };

    match state
        .auth
        .register(&request.email, &request.password, request.name.clone(), roles)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
