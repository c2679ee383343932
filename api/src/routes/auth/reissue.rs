use actix_web::{web, HttpResponse};

use crate::dto::auth::{ReissueRequest, TokenPairResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for POST /reissue
///
/// Exchanges a valid refresh token for a fresh token pair. The identity and
/// roles come from the submitted access token's claims, which may already
/// have expired; the refresh token must match the identity's single stored
/// one. On success the stored entry is rotated, so replaying the old
/// refresh token fails.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// A new token pair, same shape as login.
///
/// ## Errors
/// - 400 Bad Request: Either token is structurally invalid or expired
///   (refresh token) or missing usable claims (access token)
/// - 401 Unauthorized: Refresh token does not match the stored one
pub async fn reissue<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    request: web::Json<ReissueRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    match state
        .auth_service
        .reissue(&request.access_token, &request.refresh_token)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
