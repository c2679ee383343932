use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::meal::MessageResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for DELETE /meal/{meal_id}/delete
///
/// Removes one of the caller's meals.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Meal deleted"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed meal id
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 404 Not Found: No such meal, or it belongs to another member
pub async fn delete_meal<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    let meal_id = path.into_inner();

    match state.meal_service.delete_meal(&auth.identity, meal_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Meal deleted".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
