//! Bearer token authentication middleware.
//!
//! Extracts the `Authorization: Bearer` token, validates it, loads the
//! account behind the token subject and attaches a [`Principal`] to the
//! request. The middleware never rejects a request itself: when the header
//! is missing, the token is invalid or expired, or the account is unknown
//! or disabled, the request simply continues anonymously and the role
//! checks in the service layer decide the outcome.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use rems_core::domain::entities::principal::Principal;
use rems_core::repositories::UserRepository;
use rems_core::services::token::TokenService;

/// Shared state the middleware resolves tokens against.
#[derive(Clone)]
pub struct AuthState {
    pub token_service: Arc<TokenService>,
    pub users: Arc<dyn UserRepository>,
}

/// Authentication middleware factory.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let state = req.app_data::<web::Data<AuthState>>().cloned();

        Box::pin(async move {
            if let Some(state) = state {
                if let Some(principal) = resolve_principal(&req, &state).await {
                    req.extensions_mut().insert(principal);
                }
            }
            service.call(req).await
        })
    }
}

/// Resolves the request's bearer token to a principal, if possible.
async fn resolve_principal(req: &ServiceRequest, state: &AuthState) -> Option<Principal> {
    let token = extract_bearer_token(req)?;

    let claims = match state.token_service.validate(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("token rejected: {}", e);
            return None;
        }
    };

    let user = match state.users.find_by_email(&claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::debug!(subject = %claims.sub, "token subject has no account");
            return None;
        }
        Err(e) => {
            tracing::error!("user lookup during authentication failed: {}", e);
            return None;
        }
    };

    if !user.enabled {
        tracing::debug!(user_id = %user.id, "token for disabled account ignored");
        return None;
    }

    Some(Principal::from_user(&user))
}

/// Extracts the Bearer token from the Authorization header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for the principal attached by the middleware, if any.
///
/// Always succeeds; handlers pass the inner option to the service layer,
/// which decides between 401 and 403.
pub struct OptionalAuth(pub Option<Principal>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();
        ready(Ok(OptionalAuth(principal)))
    }
}
