//! Visit booking endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use rems_core::domain::entities::booking::BookingStatus;
use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::booking_dto::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::OptionalAuth;

/// Handler for POST /api/v1/bookings
///
/// Books a visit to an existing listing for the acting user.
///
/// # Responses
/// - 201 Created: booking created in pending status
/// - 401 Unauthorized: no valid token
/// - 404 Not Found: listing does not exist
pub async fn create<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state
        .bookings
        .create(auth.0.as_ref(), request.property_id, request.visit_date)
        .await
    {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/{id}
///
/// Visible to the booking's owner and to admins/agents.
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
    match state.bookings.get(auth.0.as_ref(), path.into_inner()).await {
        Ok(booking) => HttpResponse::Ok().json(booking),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/me
pub async fn mine<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.bookings.mine(auth.0.as_ref()).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings
///
/// Admin/agent only.
pub async fn list_all<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state.bookings.list_all(auth.0.as_ref()).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/user/{user_id}
///
/// Admin/agent only.
pub async fn by_user<U, P, B, F>(
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
        .bookings
        .list_by_user(auth.0.as_ref(), path.into_inner())
        .await
    {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/status/{status}
///
/// Admin/agent only. The status segment must be a known lifecycle tag.
pub async fn by_status<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let tag = path.into_inner();
    let Some(status) = BookingStatus::parse(&tag) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_status".to_string(),
            format!("unknown booking status: {}", tag),
        ));
    };

    match state.bookings.list_by_status(auth.0.as_ref(), status).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/property/{property_id}
///
/// Admin/agent/owner only.
pub async fn by_property<U, P, B, F>(
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
        .bookings
        .list_by_property(auth.0.as_ref(), path.into_inner())
        .await
    {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/bookings/{id}/status
///
/// Admin/agent only.
pub async fn update_status<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    auth: OptionalAuth,
    path: web::Path<Uuid>,
    request: web::Json<UpdateBookingStatusRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state
        .bookings
        .update_status(auth.0.as_ref(), path.into_inner(), request.status)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(booking),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/bookings/{id}
///
/// Admin/agent only.
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
        .bookings
        .delete(auth.0.as_ref(), path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
