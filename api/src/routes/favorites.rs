//! Saved-listing endpoints. Customer role only.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::favorite_dto::AddFavoriteRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::OptionalAuth;

/// Handler for GET /api/v1/favorites
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
    match state.favorites.list(auth.0.as_ref()).await {
        Ok(favorites) => HttpResponse::Ok().json(favorites),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/favorites
///
/// # Responses
/// - 201 Created: listing saved
/// - 400 Bad Request: already saved
/// - 403 Forbidden: token holder is not a customer
/// - 404 Not Found: listing does not exist
pub async fn add<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    request: web::Json<AddFavoriteRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state
        .favorites
        .add(auth.0.as_ref(), request.property_id)
        .await
    {
        Ok(favorite) => HttpResponse::Created().json(favorite),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/favorites/{property_id}
pub async fn remove<U, P, B, F>(
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
    match state
        .favorites
        .remove(auth.0.as_ref(), path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
