//! REMS API server binary.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use rems_api::app::{create_app, AppState};
use rems_api::middleware::auth::AuthState;
use rems_core::repositories::UserRepository;
use rems_core::services::auth::{AuthService, AuthServiceConfig};
use rems_core::services::booking::BookingService;
use rems_core::services::favorite::FavoriteService;
use rems_core::services::password::PasswordHasher;
use rems_core::services::property::PropertyService;
use rems_core::services::token::TokenService;
use rems_core::services::user::UserService;
use rems_infra::database::connection::{connect, health_check};
use rems_infra::database::mysql::{
    MySqlBookingRepository, MySqlFavoriteRepository, MySqlPropertyRepository, MySqlUserRepository,
};
use rems_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set, using the built-in development secret");
    }

    let pool = connect(&config.database).await?;
    if !health_check(&pool).await? {
        anyhow::bail!("database health check failed");
    }

    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let property_repo = Arc::new(MySqlPropertyRepository::new(pool.clone()));
    let booking_repo = Arc::new(MySqlBookingRepository::new(pool.clone()));
    let favorite_repo = Arc::new(MySqlFavoriteRepository::new(pool));

    let token_service = Arc::new(TokenService::new(config.jwt.clone().into()));

    let app_state = web::Data::new(AppState {
        auth: AuthService::new(
            Arc::clone(&users),
            PasswordHasher::default(),
            Arc::clone(&token_service),
            AuthServiceConfig::default(),
        ),
        users: UserService::new(Arc::clone(&users)),
        properties: PropertyService::new(Arc::clone(&property_repo)),
        bookings: BookingService::new(booking_repo, Arc::clone(&property_repo)),
        favorites: FavoriteService::new(favorite_repo, property_repo),
    });
    let auth_state = web::Data::new(AuthState {
        token_service,
        users: users as Arc<dyn UserRepository>,
    });

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "starting REMS API server");

    HttpServer::new(move || create_app(app_state.clone(), auth_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
