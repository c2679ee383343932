use actix_web::{web, HttpResponse};

use crate::dto::meal::MealLogResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for GET /user/{user_id}/meals
///
/// Returns the caller's own meal log, newest first. Like the profile
/// route, a foreign user id in the path reads as not found.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "meals": [ ... ],
///     "total": 3
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 404 Not Found: Foreign user id, or the member no longer exists
pub async fn meal_log<M, L, S>(
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

    match state.meal_service.meal_log(&auth.identity, &user_id).await {
        Ok(meals) => HttpResponse::Ok().json(MealLogResponse::new(meals)),
        Err(error) => handle_domain_error(error),
    }
}
