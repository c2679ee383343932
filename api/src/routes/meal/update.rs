use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::meal::{MealResponse, UpdateMealRequest};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for PUT /meal/{meal_id}/update
///
/// Replaces the meal type and quantity of one of the caller's meals.
///
/// # Request Body
///
/// Same shape as logging a meal.
///
/// # Response
///
/// ## Success (200 OK)
/// The updated meal.
///
/// ## Errors
/// - 400 Bad Request: Malformed meal id or unknown meal type/quantity
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 404 Not Found: No such meal, or it belongs to another member
pub async fn update_meal<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateMealRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    L: MealRepository + 'static,
    S: TtlStore + 'static,
{
    let meal_id = path.into_inner();

    match state
        .meal_service
        .update_meal(&auth.identity, meal_id, request.meal_type, request.quantity)
        .await
    {
        Ok(meal) => HttpResponse::Ok().json(MealResponse::from(meal)),
        Err(error) => handle_domain_error(error),
    }
}
