//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;

use bl_shared::utils::validation::{
    is_valid_password, is_valid_user_id, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
};

use crate::domain::entities::member::Member;
use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::member::MemberRepository;
use crate::repositories::session::TtlStore;
use crate::services::session::SessionStore;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service coordinating login, logout, and token reissue
///
/// Composes the token service with the session store: the token service
/// mints and checks tokens, the session store pins the single live refresh
/// token per identity and remembers revoked access tokens until they would
/// have expired anyway.
pub struct AuthService<M, S>
where
    M: MemberRepository,
    S: TtlStore,
{
    /// Member repository for credential lookups and registration
    member_repository: Arc<M>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Session store holding refresh tokens and the denylist
    session_store: SessionStore<S>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<M, S> AuthService<M, S>
where
    M: MemberRepository,
    S: TtlStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `member_repository` - Repository for member data persistence
    /// * `token_service` - Service for JWT token management
    /// * `session_store` - Store for refresh tokens and the denylist
    /// * `config` - Service configuration
    pub fn new(
        member_repository: Arc<M>,
        token_service: Arc<TokenService>,
        session_store: SessionStore<S>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            member_repository,
            token_service,
            session_store,
            config,
        }
    }

    /// Register a new member
    ///
    /// This method:
    /// 1. Rejects mismatched password confirmation before touching storage
    /// 2. Validates the user id shape and password length
    /// 3. Rejects already-taken user ids
    /// 4. Hashes the password and persists the member with the `USER` role
    ///
    /// # Arguments
    ///
    /// * `user_id` - Desired login user id
    /// * `password` - Chosen password
    /// * `repeated_password` - Confirmation of the chosen password
    ///
    /// # Returns
    ///
    /// * `Ok(Member)` - The newly created member
    /// * `Err(DomainError)` - Registration failed
    pub async fn register(
        &self,
        user_id: &str,
        password: &str,
        repeated_password: &str,
    ) -> DomainResult<Member> {
        // Step 1: Confirm the two passwords agree before any store access
        if password != repeated_password {
            return Err(DomainError::Auth(AuthError::PasswordMismatch));
        }

        // Step 2: Validate the user id and password shape
        if !is_valid_user_id(user_id) {
            return Err(DomainError::Validation {
                message: "User id must be 4-20 characters of letters, digits, or underscores"
                    .to_string(),
            });
        }
        if !is_valid_password(password) {
            return Err(DomainError::Validation {
                message: format!(
                    "Password must be between {} and {} characters",
                    PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
                ),
            });
        }

        // Step 3: Reject already-taken user ids
        if self.member_repository.exists_by_user_id(user_id).await? {
            return Err(DomainError::Auth(AuthError::DuplicateUserId {
                user_id: user_id.to_string(),
            }));
        }

        // Step 4: Hash the password and persist the member
        let password_hash =
            bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })?;

        let member = self
            .member_repository
            .create(Member::new(user_id.to_string(), password_hash))
            .await?;

        tracing::info!(
            user_id = %member.user_id,
            event = "member_registered",
            "New member registered"
        );

        Ok(member)
    }

    /// Log a member in and issue a fresh token pair
    ///
    /// This method:
    /// 1. Looks the member up by user id
    /// 2. Verifies the password against the stored bcrypt hash
    /// 3. Mints an access/refresh token pair
    /// 4. Stores the refresh token under the identity's session key
    ///
    /// An unknown user id and a wrong password both collapse into
    /// `InvalidCredentials`; callers cannot probe which ids exist.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The minted pair
    /// * `Err(DomainError)` - Login failed
    pub async fn login(&self, user_id: &str, password: &str) -> DomainResult<TokenPair> {
        // Step 1: Look the member up
        let member = self
            .member_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        // Step 2: Verify the password
        let password_matches =
            bcrypt::verify(password, &member.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Failed to verify password: {}", e),
            })?;
        if !password_matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 3: Mint the token pair
        let identity = member.identity();
        let pair = self.token_service.issue_pair(&identity)?;

        // Step 4: Pin the refresh token for the identity, replacing any
        // previous session
        let ttl = (pair.refresh_expires_at - Utc::now())
            .to_std()
            .unwrap_or_default();
        self.session_store
            .store_refresh_token(&member.user_id, &pair.refresh_token, ttl)
            .await?;

        tracing::info!(
            user_id = %member.user_id,
            event = "login",
            "Member logged in"
        );

        Ok(pair)
    }

    /// Log out the session belonging to the given access token
    ///
    /// This method:
    /// 1. Rejects tokens that fail validation outright
    /// 2. Resolves the identity from the token's claims
    /// 3. Removes the identity's stored refresh token (absent is fine)
    /// 4. Denylists the access token for the rest of its natural life
    ///
    /// Logging out twice with the same token is a no-op the second time,
    /// not an error.
    pub async fn logout(&self, access_token: &str) -> DomainResult<()> {
        // Step 1: A token that does not validate cannot end a session
        if !self.token_service.validate(access_token) {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        // Step 2: Resolve who is logging out
        let identity = self.token_service.authenticate(access_token)?;

        // Step 3: Drop the stored refresh token; an absent entry means the
        // session was already gone
        self.session_store
            .remove_refresh_token(&identity.user_id)
            .await?;

        // Step 4: Deny the access token until it would have expired anyway.
        // A token with no life left needs no denylist entry.
        let remaining = self.token_service.remaining_lifetime(access_token)?;
        if remaining > chrono::Duration::zero() {
            let ttl = remaining.to_std().unwrap_or_default();
            self.session_store
                .deny_access_token(access_token, ttl)
                .await?;
        }

        tracing::info!(
            user_id = %identity.user_id,
            event = "logout",
            "Member logged out"
        );

        Ok(())
    }

    /// Reissue a token pair from an access/refresh token combination
    ///
    /// This method:
    /// 1. Rejects refresh tokens that fail validation
    /// 2. Resolves the identity from the access token's claims, expired or
    ///    not
    /// 3. Compares the supplied refresh token with the stored one; absence
    ///    or inequality both fail the same way
    /// 4. Mints a new pair and rotates the stored refresh token
    ///
    /// The roles on the new pair come from the old access token's claims.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The rotated pair
    /// * `Err(DomainError)` - Reissue failed
    pub async fn reissue(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> DomainResult<TokenPair> {
        // Step 1: The refresh token itself must still be valid
        if !self.token_service.validate(refresh_token) {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        // Step 2: Resolve the identity from the access token, which may
        // already have expired
        let identity = self.token_service.authenticate(access_token)?;

        // Step 3: The supplied refresh token must match the stored one.
        // Covers never-logged-in, logged-out, and superseded sessions alike.
        let stored = self
            .session_store
            .fetch_refresh_token(&identity.user_id)
            .await?;
        match stored {
            Some(ref current) if current == refresh_token => {}
            _ => return Err(DomainError::Token(TokenError::RefreshTokenMismatch)),
        }

        // Step 4: Mint a new pair and rotate the stored refresh token
        let pair = self.token_service.issue_pair(&identity)?;
        let ttl = (pair.refresh_expires_at - Utc::now())
            .to_std()
            .unwrap_or_default();
        self.session_store
            .store_refresh_token(&identity.user_id, &pair.refresh_token, ttl)
            .await?;

        tracing::debug!(
            user_id = %identity.user_id,
            event = "token_reissued",
            "Token pair reissued"
        );

        Ok(pair)
    }
}
