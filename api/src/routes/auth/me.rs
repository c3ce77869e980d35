use actix_web::{web, HttpResponse};
use validator::Validate;

use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::auth_dto::{UpdateProfileRequest, UserResponse};
use crate::handlers::error::{handle_domain_error, validation_failure};
use crate::middleware::auth::OptionalAuth;

/// Handler for GET /api/v1/auth/me
///
/// Returns the acting user's own record. 401 without a valid token.
pub async fn current_user<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.auth.current_user(auth.0.as_ref()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/auth/me
///
/// Updates the acting user's display name and, optionally, their password.
pub async fn update_profile<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    request: web::Json<UpdateProfileRequest>,
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

    match state
        .auth
        .update_profile(auth.0.as_ref(), request.name.clone(), request.password.clone())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
