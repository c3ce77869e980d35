//! Admin account administration endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use rems_core::errors::ValidationError;
use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::auth_dto::UserResponse;
use crate::dto::user_dto::UpdateUserRequest;
use crate::handlers::error::{handle_domain_error, validation_failure};
use crate::middleware::auth::OptionalAuth;

/// Handler for GET /api/v1/users
///
/// Admin only.
pub async fn list<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.users.list(auth.0.as_ref()).await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/users/{id}
///
/// Admin only.
pub async fn get<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.users.get(auth.0.as_ref(), path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/{id}
///
/// Admin only. Changes the name, role set, or enabled flag of an account;
/// absent fields are left untouched.
pub async fn update<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
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
        .users
        .update(
            auth.0.as_ref(),
            path.into_inner(),
            request.into_inner().into_update(roles),
        )
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/users/{id}
///
/// Admin only.
pub async fn delete<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.users.delete(auth.0.as_ref(), path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
