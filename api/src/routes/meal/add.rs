use actix_web::{web, HttpResponse};

use crate::dto::meal::{LogMealRequest, MealResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for POST /meal/add
///
/// Logs a meal for the authenticated caller.
///
/// # Request Body
///
/// ```json
/// {
///     "meal_type": "breakfast",
///     "quantity": "regular"
/// }
/// ```
///
/// Valid meal types are `breakfast`, `lunch`, `dinner`, and `snack`; valid
/// quantities are `light`, `regular`, and `large`.
///
/// # Response
///
/// ## Success (201 Created)
/// The stored meal.
///
/// ## Errors
/// - 400 Bad Request: Unknown meal type or quantity
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 404 Not Found: The caller's member record no longer exists
pub async fn add_meal<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    auth: AuthContext,
    request: web::Json<LogMealRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    match state
        .meal_service
        .log_meal(&auth.identity, request.meal_type, request.quantity)
        .await
    {
        Ok(meal) => HttpResponse::Created().json(MealResponse::from(meal)),
        Err(error) => handle_domain_error(error),
    }
}
