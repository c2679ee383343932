//! Unit tests for the authentication service flows

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::member::Role;
use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::member::{MemberRepository, MockMemberRepository};
use crate::repositories::session::InMemoryTtlStore;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::session::SessionStore;
use crate::services::token::{TokenService, TokenServiceConfig};

type TestAuthService = AuthService<MockMemberRepository, InMemoryTtlStore>;

fn create_service() -> (
    TestAuthService,
    SessionStore<InMemoryTtlStore>,
    Arc<MockMemberRepository>,
) {
    let member_repository = Arc::new(MockMemberRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let session_store = SessionStore::new(Arc::new(InMemoryTtlStore::new()));

    // Minimum bcrypt cost keeps the tests fast
    let config = AuthServiceConfig { bcrypt_cost: 4 };
    let service = AuthService::new(
        Arc::clone(&member_repository),
        token_service,
        session_store.clone(),
        config,
    );

    (service, session_store, member_repository)
}

async fn register_and_login(service: &TestAuthService) -> TokenPair {
    service
        .register("alice_01", "password123", "password123")
        .await
        .unwrap();
    service.login("alice_01", "password123").await.unwrap()
}

/// Signs claims with the default secret, bypassing the token service
fn encode_raw(claims: &Claims) -> String {
    let config = TokenServiceConfig::default();
    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    encode(&Header::default(), claims, &key).unwrap()
}

#[tokio::test]
async fn test_register_creates_user_member() {
    let (service, _, repository) = create_service();

    let member = service
        .register("alice_01", "password123", "password123")
        .await
        .unwrap();

    assert_eq!(member.user_id, "alice_01");
    assert_eq!(member.role, Role::User);
    assert!(bcrypt::verify("password123", &member.password_hash).unwrap());

    let stored = repository.find_by_user_id("alice_01").await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_register_password_mismatch_writes_nothing() {
    let (service, _, repository) = create_service();

    let result = service
        .register("alice_01", "password123", "different456")
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::PasswordMismatch)
    ));
    assert!(!repository.exists_by_user_id("alice_01").await.unwrap());
}

#[tokio::test]
async fn test_register_duplicate_user_id() {
    let (service, _, _) = create_service();

    service
        .register("alice_01", "password123", "password123")
        .await
        .unwrap();

    let result = service
        .register("alice_01", "otherpass456", "otherpass456")
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::DuplicateUserId { ref user_id }) if user_id == "alice_01"
    ));
}

#[tokio::test]
async fn test_register_rejects_malformed_user_id() {
    let (service, _, _) = create_service();

    let too_short = service.register("ab", "password123", "password123").await;
    assert!(matches!(
        too_short.unwrap_err(),
        DomainError::Validation { .. }
    ));

    let bad_chars = service
        .register("alice bites!", "password123", "password123")
        .await;
    assert!(matches!(
        bad_chars.unwrap_err(),
        DomainError::Validation { .. }
    ));
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (service, _, _) = create_service();

    let result = service.register("alice_01", "short", "short").await;
    assert!(matches!(result.unwrap_err(), DomainError::Validation { .. }));
}

#[tokio::test]
async fn test_login_issues_pair_and_pins_refresh_token() {
    let (service, session_store, _) = create_service();

    let pair = register_and_login(&service).await;

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());

    let stored = session_store.fetch_refresh_token("alice_01").await.unwrap();
    assert_eq!(stored, Some(pair.refresh_token));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (service, _, _) = create_service();

    let result = service.login("nobody_42", "password123").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (service, _, _) = create_service();

    service
        .register("alice_01", "password123", "password123")
        .await
        .unwrap();

    let result = service.login("alice_01", "wrongpass99").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_then_immediate_reissue() {
    let (service, _, _) = create_service();

    let pair = register_and_login(&service).await;
    let reissued = service
        .reissue(&pair.access_token, &pair.refresh_token)
        .await
        .unwrap();

    assert_ne!(reissued.access_token, pair.access_token);
    assert_ne!(reissued.refresh_token, pair.refresh_token);
}

#[tokio::test]
async fn test_second_login_invalidates_first_refresh_token() {
    let (service, _, _) = create_service();

    let first = register_and_login(&service).await;
    let _second = service.login("alice_01", "password123").await.unwrap();

    let result = service
        .reissue(&first.access_token, &first.refresh_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::RefreshTokenMismatch)
    ));
}

#[tokio::test]
async fn test_reissue_rotates_stored_refresh_token() {
    let (service, session_store, _) = create_service();

    let pair = register_and_login(&service).await;
    let reissued = service
        .reissue(&pair.access_token, &pair.refresh_token)
        .await
        .unwrap();

    let stored = session_store.fetch_refresh_token("alice_01").await.unwrap();
    assert_eq!(stored, Some(reissued.refresh_token.clone()));

    // The superseded refresh token is no longer usable
    let replay = service
        .reissue(&reissued.access_token, &pair.refresh_token)
        .await;
    assert!(matches!(
        replay.unwrap_err(),
        DomainError::Token(TokenError::RefreshTokenMismatch)
    ));
}

#[tokio::test]
async fn test_reissue_with_garbage_refresh_token() {
    let (service, _, _) = create_service();

    let pair = register_and_login(&service).await;
    let result = service.reissue(&pair.access_token, "not-a-token").await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_reissue_after_logout_fails() {
    let (service, _, _) = create_service();

    let pair = register_and_login(&service).await;
    service.logout(&pair.access_token).await.unwrap();

    let result = service
        .reissue(&pair.access_token, &pair.refresh_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::RefreshTokenMismatch)
    ));
}

#[tokio::test]
async fn test_reissue_with_expired_access_token_succeeds() {
    let (service, _, _) = create_service();

    let pair = register_and_login(&service).await;

    // Access token minted in the past, well outside decoder leeway
    let expired_claims = Claims::new_access_token(
        "alice_01",
        vec!["USER".to_string()],
        Duration::minutes(-120),
    );
    let expired_access = encode_raw(&expired_claims);

    let reissued = service
        .reissue(&expired_access, &pair.refresh_token)
        .await
        .unwrap();

    assert!(!reissued.access_token.is_empty());
}

#[tokio::test]
async fn test_logout_denylists_access_token_and_drops_refresh() {
    let (service, session_store, _) = create_service();

    let pair = register_and_login(&service).await;
    service.logout(&pair.access_token).await.unwrap();

    assert!(session_store
        .is_access_token_denied(&pair.access_token)
        .await
        .unwrap());
    assert_eq!(
        session_store.fetch_refresh_token("alice_01").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (service, _, _) = create_service();

    let pair = register_and_login(&service).await;

    service.logout(&pair.access_token).await.unwrap();
    service.logout(&pair.access_token).await.unwrap();
}

#[tokio::test]
async fn test_logout_with_invalid_token() {
    let (service, _, _) = create_service();

    let result = service.logout("not-a-token").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_reissued_pair_keeps_identity_claims() {
    let (service, _, _) = create_service();

    let token_service = TokenService::new(TokenServiceConfig::default());
    let pair = register_and_login(&service).await;
    let reissued = service
        .reissue(&pair.access_token, &pair.refresh_token)
        .await
        .unwrap();

    let original = token_service.authenticate(&pair.access_token).unwrap();
    let rotated = token_service.authenticate(&reissued.access_token).unwrap();

    assert_eq!(original, rotated);
    assert_eq!(rotated.user_id, "alice_01");
    assert_eq!(rotated.roles, vec![Role::User]);
}
