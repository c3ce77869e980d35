//! Property listing endpoints.
//!
//! Reads are public. Creating requires the agent role; updating and
//! deleting additionally require owning the listing.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::property_dto::{CreatePropertyRequest, PropertyQuery, UpdatePropertyRequest};
use crate::handlers::error::{handle_domain_error, validation_failure};
use crate::middleware::auth::OptionalAuth;

/// Handler for GET /api/v1/properties
///
/// Lists all listings, newest first, optionally narrowed by query
/// criteria (`q`, `min_price`, `max_price`, `property_type`).
pub async fn list<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    query: web::Query<PropertyQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.properties.list(&query.into_inner().into()).await {
        Ok(properties) => HttpResponse::Ok().json(properties),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/properties/{id}
pub async fn get<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.properties.get(path.into_inner()).await {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/properties/agent/{agent_id}
pub async fn by_agent<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.properties.by_agent(path.into_inner()).await {
        Ok(properties) => HttpResponse::Ok().json(properties),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/properties
///
/// # Responses
/// - 201 Created: listing created, owned by the acting agent
/// - 401 Unauthorized: no valid token
/// - 403 Forbidden: token holder is not an agent
pub async fn create<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    request: web::Json<CreatePropertyRequest>,
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
        .properties
        .create(auth.0.as_ref(), request.into_inner().into())
        .await
    {
        Ok(property) => HttpResponse::Created().json(property),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/properties/{id}
///
/// Partial update; absent fields keep their value. Only the owning agent
/// may update a listing.
pub async fn update<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    path: web::Path<Uuid>,
    request: web::Json<UpdatePropertyRequest>,
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
        .properties
        .update(auth.0.as_ref(), path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/properties/{id}
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
    match state
        .properties
        .delete(auth.0.as_ref(), path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
