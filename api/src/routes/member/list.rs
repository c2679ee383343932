use actix_web::{web, HttpResponse};

use crate::dto::member::MemberListResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for GET /admin/members
///
/// Lists every registered member. The route policy restricts `/admin/**`
/// to the `ADMIN` role before this handler runs.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "members": [ ... ],
///     "total": 2
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 403 Forbidden: Authenticated but not an administrator
pub async fn list_members<M, L, S>(state: web::Data<AppState<M, L, S>>) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    match state.member_service.list_members().await {
        Ok(members) => HttpResponse::Ok().json(MemberListResponse::new(members)),
        Err(error) => handle_domain_error(error),
    }
}
