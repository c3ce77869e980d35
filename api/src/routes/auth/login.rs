use actix_web::{web, HttpResponse};
use validator::Validate;

use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, UserResponse};
use crate::handlers::error::{handle_domain_error, validation_failure};

/// Handler for POST /api/v1/auth/login
///
/// Verifies the credentials and mints a bearer token.
///
/// # Responses
/// - 200 OK: returns the token, its lifetime in seconds, and the user
/// - 401 Unauthorized: wrong password or disabled account
/// - 404 Not Found: no account for that email
pub async fn login<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    request: web::Json<LoginRequest>,
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

    match state.auth.login(&request.email, &request.password).await {
        Ok(outcome) => HttpResponse::Ok().json(LoginResponse {
            token: outcome.token,
            expires_in: outcome.expires_in,
            user: UserResponse::from(outcome.user),
        }),
        Err(error) => handle_domain_error(error),
    }
}
