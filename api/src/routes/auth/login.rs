use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, TokenPairResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for POST /login
///
/// Verifies the member's credentials and opens a session: a fresh token
/// pair is minted and the refresh token becomes the identity's single live
/// one, displacing any earlier session.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "alice_01",
///     "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "grant_type": "Bearer",
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "refresh_expires_at": "2026-01-08T12:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed user id or password
/// - 401 Unauthorized: Unknown user id or wrong password
pub async fn login<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .login(&request.user_id, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
