//! Integration tests for the member profile and admin listing endpoints

use std::sync::Arc;

use actix_web::{http::header, test, web};

use bl_api::app::create_app;
use bl_api::routes::AppState;
use bl_core::domain::entities::member::Role;
use bl_core::domain::value_objects::identity::Identity;
use bl_core::repositories::member::MemberRepository;
use bl_core::repositories::{InMemoryTtlStore, MockMealRepository, MockMemberRepository};
use bl_core::services::auth::{AuthService, AuthServiceConfig};
use bl_core::services::meal::MealService;
use bl_core::services::member::MemberService;
use bl_core::services::session::SessionStore;
use bl_core::services::token::{TokenService, TokenServiceConfig};

type TestState = web::Data<AppState<MockMemberRepository, MockMealRepository, InMemoryTtlStore>>;

/// Builds the application state and hands back the member repository too,
/// for tests that mutate storage behind the services' back.
fn test_state() -> (TestState, Arc<MockMemberRepository>) {
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

    let state = web::Data::new(AppState {
        auth_service,
        member_service,
        meal_service,
        token_service,
        session_store,
    });

    (state, member_repository)
}

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

#[actix_web::test]
async fn test_profile_returns_own_member() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let token = member_token(&state, "alice_01").await;

    let req = test::TestRequest::get()
        .uri("/user/alice_01")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], "alice_01");
    assert_eq!(body["role"], "USER");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn test_profile_of_another_member_is_not_found() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let token = member_token(&state, "alice_01").await;
    member_token(&state, "bob_2024").await;

    // Bob exists, but the response must not say so
    let req = test::TestRequest::get()
        .uri("/user/bob_2024")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Resource not found");
}

#[actix_web::test]
async fn test_profile_is_self_access_only_even_for_admin() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    member_token(&state, "alice_01").await;

    let identity = Identity::new("back_office", vec![Role::Admin]);
    let pair = state.token_service.issue_pair(&identity).unwrap();

    // The admin listing is the administrative surface; individual profiles
    // stay owner-only
    let req = test::TestRequest::get()
        .uri("/user/alice_01")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", pair.access_token),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_profile_after_account_deleted() {
    let (state, member_repository) = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let member = state
        .auth_service
        .register("alice_01", "password123", "password123")
        .await
        .unwrap();
    let pair = state
        .auth_service
        .login("alice_01", "password123")
        .await
        .unwrap();

    // The token outlives the account
    assert!(member_repository.delete(member.id).await.unwrap());

    let req = test::TestRequest::get()
        .uri("/user/alice_01")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", pair.access_token),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MEMBER_NOT_FOUND");
}

#[actix_web::test]
async fn test_member_list_reflects_registrations() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    for user_id in ["alice_01", "bob_2024", "carol_x"] {
        member_token(&state, user_id).await;
    }

    let identity = Identity::new("back_office", vec![Role::Admin]);
    let pair = state.token_service.issue_pair(&identity).unwrap();

    let req = test::TestRequest::get()
        .uri("/admin/members")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", pair.access_token),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 3);

    let members = body["members"].as_array().unwrap();
    assert_eq!(members.len(), 3);
    for member in members {
        assert!(member.get("password_hash").is_none());
    }
}
