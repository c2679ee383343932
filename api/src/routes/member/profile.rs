use actix_web::{web, HttpResponse};

use crate::dto::member::MemberResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for GET /user/{user_id}
///
/// Returns the caller's own profile. The path user id must equal the
/// authenticated identity; anyone else's path reads as not found, so the
/// route leaks nothing about which user ids exist.
///
/// # Response
///
/// ## Success (200 OK)
/// Member summary without the password hash.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 404 Not Found: Foreign user id, or the member no longer exists
pub async fn profile<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    let user_id = path.into_inner();

    match state.member_service.profile(&auth.identity, &user_id).await {
        Ok(member) => HttpResponse::Ok().json(MemberResponse::from(member)),
        Err(error) => handle_domain_error(error),
    }
}
