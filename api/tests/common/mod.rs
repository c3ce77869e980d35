//! Shared fixtures for API integration tests.

use std::sync::Arc;

use actix_web::web;

use rems_api::app::AppState;
use rems_api::middleware::auth::AuthState;
use rems_core::domain::entities::user::{Role, User};
use rems_core::repositories::booking::MockBookingRepository;
use rems_core::repositories::favorite::MockFavoriteRepository;
use rems_core::repositories::property::MockPropertyRepository;
use rems_core::repositories::user::MockUserRepository;
use rems_core::repositories::UserRepository;
use rems_core::services::auth::{AuthService, AuthServiceConfig};
use rems_core::services::booking::BookingService;
use rems_core::services::favorite::FavoriteService;
use rems_core::services::password::PasswordHasher;
use rems_core::services::property::PropertyService;
use rems_core::services::token::{TokenService, TokenServiceConfig};
use rems_core::services::user::UserService;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_ISSUER: &str = "rems";
pub const TEST_PASSWORD: &str = "Secret1!";
/// bcrypt's minimum cost; the `bcrypt::MIN_COST` constant is private in 0.15.
pub const MIN_BCRYPT_COST: u32 = 4;

pub type TestAppState = AppState<
    MockUserRepository,
    MockPropertyRepository,
    MockBookingRepository,
    MockFavoriteRepository,
>;

pub fn token_config() -> TokenServiceConfig {
    TokenServiceConfig {
        secret: TEST_SECRET.to_string(),
        token_lifetime_seconds: 3600,
        issuer: TEST_ISSUER.to_string(),
    }
}

/// In-memory application wiring plus direct handles for seeding accounts.
pub struct TestContext {
    pub app_state: web::Data<TestAppState>,
    pub auth_state: web::Data<AuthState>,
    pub users: Arc<MockUserRepository>,
    pub token_service: Arc<TokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let property_repo = Arc::new(MockPropertyRepository::new());
        let booking_repo = Arc::new(MockBookingRepository::new());
        let favorite_repo = Arc::new(MockFavoriteRepository::new());

        let token_service = Arc::new(TokenService::new(token_config()));

        let app_state = web::Data::new(AppState {
            auth: AuthService::new(
                Arc::clone(&users),
                PasswordHasher::with_cost(MIN_BCRYPT_COST),
                Arc::clone(&token_service),
                AuthServiceConfig::default(),
            ),
            users: UserService::new(Arc::clone(&users)),
            properties: PropertyService::new(Arc::clone(&property_repo)),
            bookings: BookingService::new(booking_repo, Arc::clone(&property_repo)),
            favorites: FavoriteService::new(favorite_repo, property_repo),
        });
        let auth_state = web::Data::new(AuthState {
            token_service: Arc::clone(&token_service),
            users: Arc::clone(&users) as Arc<dyn UserRepository>,
        });

        Self {
            app_state,
            auth_state,
            users,
            token_service,
        }
    }

    /// Creates an enabled account with the given roles and returns a valid
    /// bearer token for it. The password is [`TEST_PASSWORD`].
    pub async fn seed_user(&self, email: &str, roles: &[Role]) -> String {
        let hash = bcrypt::hash(TEST_PASSWORD, MIN_BCRYPT_COST).unwrap();
        let user = User::new(
            email.to_string(),
            hash,
            None,
            roles.iter().copied().collect(),
        );
        self.users.create(user).await.unwrap();
        self.token_service.issue(email).unwrap()
    }

    /// Disables an existing account.
    pub async fn disable_user(&self, email: &str) {
        let mut user = self.users.find_by_email(email).await.unwrap().unwrap();
        user.disable();
        self.users.update(user).await.unwrap();
    }
}
