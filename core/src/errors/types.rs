//! Error type definitions for authentication and token management
//!
//! These enums carry machine-readable failure causes; the presentation layer
//! turns them into HTTP statuses and response bodies.

use thiserror::Error;

/// Authentication-related errors
///
/// These errors represent registration, login, and access-check failures.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User id already taken: {user_id}")]
    DuplicateUserId { user_id: String },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Member not found")]
    MemberNotFound,

    #[error("Access restricted to own resources")]
    SelfAccessOnly,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
///
/// These errors represent token validation and session management failures.
/// `InvalidToken` covers expired, tampered, and garbage input alike; callers
/// that need the distinction for diagnostics get it from the codec's logs.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Refresh token mismatch")]
    RefreshTokenMismatch,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Malformed claims")]
    MalformedClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
