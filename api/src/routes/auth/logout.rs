use actix_web::{web, HttpResponse};

use crate::dto::auth::{LogoutRequest, LogoutResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for POST /log-out
///
/// Closes the session belonging to the submitted access token: the
/// identity's refresh token is dropped and the access token goes on the
/// denylist until it would have expired anyway. Logging out twice is fine.
///
/// The route itself requires authentication, so the caller must also hold
/// a currently valid bearer token.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: The submitted token is structurally invalid
/// - 401 Unauthorized: Missing or invalid bearer token
pub async fn logout<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    match state.auth_service.logout(&request.access_token).await {
        Ok(()) => {
            let response = LogoutResponse {
                message: "Logged out successfully".to_string(),
            };
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}
