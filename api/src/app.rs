//! Application state and factory.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use rems_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};
use rems_core::services::auth::AuthService;
use rems_core::services::booking::BookingService;
use rems_core::services::favorite::FavoriteService;
use rems_core::services::property::PropertyService;
use rems_core::services::user::UserService;

use crate::middleware::auth::{AuthState, Authentication};
use crate::middleware::cors::create_cors;
use crate::routes::{auth, bookings, favorites, properties, users};

/// Container for all services the handlers depend on.
pub struct AppState<U, P, B, F>
where
    U: UserRepository,
    P: PropertyRepository,
    B: BookingRepository,
    F: FavoriteRepository,
{
    pub auth: AuthService<U>,
    pub users: UserService<U>,
    pub properties: PropertyService<P>,
    pub bookings: BookingService<B, P>,
    pub favorites: FavoriteService<F, P>,
}

/// Create and configure the application with all dependencies.
pub fn create_app<U, P, B, F>(
    app_state: web::Data<AppState<U, P, B, F>>,
    auth_state: web::Data<AuthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(auth_state)
        .wrap(Authentication)
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, P, B, F>))
                        .route("/login", web::post().to(auth::login::<U, P, B, F>))
                        .route("/me", web::get().to(auth::current_user::<U, P, B, F>))
                        .route("/me", web::put().to(auth::update_profile::<U, P, B, F>)),
                )
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list::<U, P, B, F>))
                        .route("/{id}", web::get().to(users::get::<U, P, B, F>))
                        .route("/{id}", web::put().to(users::update::<U, P, B, F>))
                        .route("/{id}", web::delete().to(users::delete::<U, P, B, F>)),
                )
                .service(
                    web::scope("/properties")
                        .route("", web::get().to(properties::list::<U, P, B, F>))
                        .route("", web::post().to(properties::create::<U, P, B, F>))
                        .route(
                            "/agent/{agent_id}",
                            web::get().to(properties::by_agent::<U, P, B, F>),
                        )
                        .route("/{id}", web::get().to(properties::get::<U, P, B, F>))
                        .route("/{id}", web::put().to(properties::update::<U, P, B, F>))
                        .route("/{id}", web::delete().to(properties::delete::<U, P, B, F>)),
                )
                .service(
                    web::scope("/bookings")
                        .route("", web::post().to(bookings::create::<U, P, B, F>))
                        .route("", web::get().to(bookings::list_all::<U, P, B, F>))
                        .route("/me", web::get().to(bookings::mine::<U, P, B, F>))
                        .route(
                            "/user/{user_id}",
                            web::get().to(bookings::by_user::<U, P, B, F>),
                        )
                        .route(
                            "/status/{status}",
                            web::get().to(bookings::by_status::<U, P, B, F>),
                        )
                        .route(
                            "/property/{property_id}",
                            web::get().to(bookings::by_property::<U, P, B, F>),
                        )
                        .route("/{id}", web::get().to(bookings::get::<U, P, B, F>))
                        .route(
                            "/{id}/status",
                            web::put().to(bookings::update_status::<U, P, B, F>),
                        )
                        .route("/{id}", web::delete().to(bookings::delete::<U, P, B, F>)),
                )
                .service(
                    web::scope("/favorites")
                        .route("", web::get().to(favorites::list::<U, P, B, F>))
                        .route("", web::post().to(favorites::add::<U, P, B, F>))
                        .route(
                            "/{property_id}",
                            web::delete().to(favorites::remove::<U, P, B, F>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rems-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler.
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
