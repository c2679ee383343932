use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::JoinRequest;
use crate::dto::member::MemberResponse;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use bl_core::repositories::meal::MealRepository;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::session::TtlStore;

/// Handler for POST /join
///
/// Registers a new member with the `USER` role. Registration does not open
/// a session; the member logs in afterwards.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "alice_01",
///     "password": "password123",
///     "repeated_password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// Member summary without the password hash.
///
/// ## Errors
/// - 400 Bad Request: Malformed user id or password, or mismatched confirmation
/// - 409 Conflict: User id already taken
pub async fn join<M, L, S>(
    state: web::Data<AppState<M, L, S>>,
    request: web::Json<JoinRequest>,
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
        .register(
            &request.user_id,
            &request.password,
            &request.repeated_password,
        )
        .await
    {
        Ok(member) => HttpResponse::Created().json(MemberResponse::from(member)),
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::auth::JoinRequest;

    #[test]
    fn test_join_request_structure() {
        let request: JoinRequest = serde_json::from_str(
            r#"{"user_id": "alice_01", "password": "password123", "repeated_password": "password123"}"#,
        )
        .unwrap();

        assert_eq!(request.user_id, "alice_01");
        assert_eq!(request.password, request.repeated_password);
    }
}
