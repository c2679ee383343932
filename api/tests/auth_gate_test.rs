//! Integration tests for the authentication gate and route policy
//!
//! These drive the whole application rather than the middleware in
//! isolation, so the policy table, the identity resolution, and the error
//! bodies are all exercised the way a real client would see them.

use std::sync::Arc;

use actix_web::{http::header, test, web};

use bl_api::app::create_app;
use bl_api::routes::AppState;
use bl_core::domain::entities::member::Role;
use bl_core::domain::value_objects::identity::Identity;
use bl_core::repositories::{InMemoryTtlStore, MockMealRepository, MockMemberRepository};
use bl_core::services::auth::{AuthService, AuthServiceConfig};
use bl_core::services::meal::MealService;
use bl_core::services::member::MemberService;
use bl_core::services::session::SessionStore;
use bl_core::services::token::{TokenService, TokenServiceConfig};

type TestState = web::Data<AppState<MockMemberRepository, MockMealRepository, InMemoryTtlStore>>;

fn test_state() -> TestState {
    let member_repository = Arc::new(MockMemberRepository::new());
    let meal_repository = Arc::new(MockMealRepository::new());
    let session_store = SessionStore::new(Arc::new(InMemoryTtlStore::new()));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&member_repository),
        Arc::clone(&token_service),
        session_store.clone(),
        AuthServiceConfig { bcrypt_cost: 4 },
    ));
    let member_service = Arc::new(MemberService::new(Arc::clone(&member_repository)));
    let meal_service = Arc::new(MealService::new(
        Arc::clone(&meal_repository),
        Arc::clone(&member_repository),
    ));

    web::Data::new(AppState {
        auth_service,
        member_service,
        meal_service,
        token_service,
        session_store,
    })
}

/// Registers a member and returns a bearer token for them.
async fn member_token(state: &TestState, user_id: &str) -> String {
    state
        .auth_service
        .register(user_id, "password123", "password123")
        .await
        .unwrap();
    let pair = state
        .auth_service
        .login(user_id, "password123")
        .await
        .unwrap();
    pair.access_token
}

/// Mints an access token carrying the `ADMIN` role without a member row.
///
/// The gate trusts the token's claims, so this is all an administrator
/// session needs for role-gated routes.
fn admin_token(state: &TestState, user_id: &str) -> String {
    let identity = Identity::new(user_id, vec![Role::Admin]);
    let pair = state.token_service.issue_pair(&identity).unwrap();
    pair.access_token
}

#[actix_web::test]
async fn test_public_routes_pass_anonymous() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    for uri in ["/", "/health"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "expected {} to be public", uri);
    }
}

#[actix_web::test]
async fn test_protected_route_rejects_anonymous() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::get().uri("/user/alice_01").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_garbage_bearer_token_degrades_to_anonymous() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    // Untrusted input must never blow up the gate; it just fails the rule
    let req = test::TestRequest::get()
        .uri("/user/alice_01")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_tampered_token_degrades_to_anonymous() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let token = member_token(&state, "alice_01").await;
    let mut tampered = token;
    tampered.push('x');

    let req = test::TestRequest::get()
        .uri("/user/alice_01")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", tampered)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_admin_route_rejects_member_token() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let token = member_token(&state, "alice_01").await;

    let req = test::TestRequest::get()
        .uri("/admin/members")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INSUFFICIENT_PERMISSIONS");
}

#[actix_web::test]
async fn test_admin_route_rejects_anonymous() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::get().uri("/admin/members").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_admin_route_accepts_admin_token() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    member_token(&state, "alice_01").await;
    member_token(&state, "bob_2024").await;
    let token = admin_token(&state, "back_office");

    let req = test::TestRequest::get()
        .uri("/admin/members")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["members"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_unmatched_path_requires_authentication() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    // The policy falls back to authenticated-only for unknown paths, so the
    // gate answers before routing does
    let req = test::TestRequest::get().uri("/no/such/route").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // With a valid session the router's not-found answer comes through
    let token = member_token(&state, "alice_01").await;
    let req = test::TestRequest::get()
        .uri("/no/such/route")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_meal_routes_require_member_role() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/meal/add")
        .set_json(serde_json::json!({
            "meal_type": "lunch",
            "quantity": "regular"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}
