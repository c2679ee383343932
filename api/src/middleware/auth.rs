//! JWT authentication gate wrapped around the whole application.
//!
//! The gate runs once per request: it resolves the route's access rule,
//! tries to reconstruct the caller's identity from the bearer token, and
//! enforces the rule. Identity resolution never fails the request on its
//! own. A missing, invalid, or denylisted token leaves the caller anonymous,
//! and the access rule then decides between 401, 403, and passing through.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use bl_core::{
    domain::value_objects::identity::Identity,
    errors::{AuthError, DomainError},
    repositories::session::TtlStore,
    services::session::SessionStore,
    services::token::TokenService,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::handle_domain_error;
use crate::middleware::policy::{Access, RoutePolicy};

/// Authenticated caller context injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Identity reconstructed from the access token claims
    pub identity: Identity,
}

impl AuthContext {
    /// Creates a new authentication context
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// Login user id of the caller
    pub fn user_id(&self) -> &str {
        &self.identity.user_id
    }
}

/// Authentication gate middleware factory
pub struct JwtAuthGate<T: TtlStore> {
    token_service: Arc<TokenService>,
    session_store: SessionStore<T>,
    policy: Rc<RoutePolicy>,
}

impl<T: TtlStore> JwtAuthGate<T> {
    /// Creates a gate with the default BiteLog route policy
    pub fn new(token_service: Arc<TokenService>, session_store: SessionStore<T>) -> Self {
        Self::with_policy(token_service, session_store, RoutePolicy::default())
    }

    /// Creates a gate with an explicit route policy
    pub fn with_policy(
        token_service: Arc<TokenService>,
        session_store: SessionStore<T>,
        policy: RoutePolicy,
    ) -> Self {
        Self {
            token_service,
            session_store,
            policy: Rc::new(policy),
        }
    }
}

impl<S, B, T> Transform<S, ServiceRequest> for JwtAuthGate<T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: TtlStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthGateMiddleware<S, T>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthGateMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            session_store: self.session_store.clone(),
            policy: Rc::clone(&self.policy),
        }))
    }
}

/// Authentication gate middleware service
pub struct JwtAuthGateMiddleware<S, T: TtlStore> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    session_store: SessionStore<T>,
    policy: Rc<RoutePolicy>,
}

impl<S, B, T> Service<ServiceRequest> for JwtAuthGateMiddleware<S, T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: TtlStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);
        let session_store = self.session_store.clone();
        let policy = Rc::clone(&self.policy);

        Box::pin(async move {
            // Step 1: Look up the access rule for this path
            let access = policy.access_for(req.path()).clone();

            // Step 2: Public routes pass through untouched
            if access == Access::Public {
                return service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body);
            }

            // Step 3: Resolve the caller's identity; failures degrade to
            // anonymous rather than rejecting the request here
            let identity = resolve_identity(&req, &token_service, &session_store).await;

            if let Some(ref identity) = identity {
                req.extensions_mut()
                    .insert(AuthContext::new(identity.clone()));
            }

            // Step 4: Enforce the rule; a denial becomes a normal error
            // response so the outer middleware still decorates it
            if let Err(error) = enforce(&access, identity.as_ref()) {
                log::debug!(
                    "Access denied for {} {}: {}",
                    req.method(),
                    req.path(),
                    error
                );
                let response = handle_domain_error(error).map_into_right_body();
                return Ok(req.into_response(response));
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Reconstructs the caller's identity from the bearer token, if possible
///
/// Every failure path returns `None`: absent header, malformed or expired
/// token, denylisted token, and a denylist lookup error all leave the caller
/// anonymous. The store error case fails closed on purpose; a token that
/// cannot be checked against the denylist is not trusted.
async fn resolve_identity<T: TtlStore>(
    req: &ServiceRequest,
    token_service: &TokenService,
    session_store: &SessionStore<T>,
) -> Option<Identity> {
    let token = extract_bearer_token(req)?;

    if !token_service.validate(&token) {
        return None;
    }

    match session_store.is_access_token_denied(&token).await {
        Ok(false) => {}
        Ok(true) => {
            log::debug!("Denylisted access token presented for {}", req.path());
            return None;
        }
        Err(error) => {
            log::warn!("Denylist lookup failed, treating caller as anonymous: {}", error);
            return None;
        }
    }

    token_service.authenticate(&token).ok()
}

/// Checks the resolved identity against the route's access rule
fn enforce(access: &Access, identity: Option<&Identity>) -> Result<(), DomainError> {
    match access {
        Access::Public => Ok(()),
        Access::Authenticated => match identity {
            Some(_) => Ok(()),
            None => Err(DomainError::Unauthorized),
        },
        Access::AnyRole(roles) => match identity {
            Some(identity) if identity.has_any_role(roles) => Ok(()),
            Some(_) => Err(DomainError::Auth(AuthError::InsufficientPermissions)),
            None => Err(DomainError::Unauthorized),
        },
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
