//! Request and response bodies for the authentication routes.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use bl_core::domain::entities::token::TokenPair;
use bl_shared::utils::validation::is_valid_user_id;

/// Shape check for login user ids, shared with the domain layer
fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if is_valid_user_id(user_id) {
        Ok(())
    } else {
        Err(ValidationError::new("user_id_format"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login user id chosen at registration
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: String,

    /// Account password
    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinRequest {
    /// Desired login user id (4-20 characters, letters, digits, underscore)
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: String,

    /// Chosen password
    #[validate(length(min = 8, max = 72))]
    pub password: String,

    /// Confirmation of the chosen password
    ///
    /// Agreement with `password` is the domain layer's rule, so a mismatch
    /// comes back as `PASSWORD_MISMATCH` rather than a validation error.
    pub repeated_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReissueRequest {
    /// The (possibly expired) access token the pair was issued with
    pub access_token: String,

    /// The refresh token being exchanged
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// The access token to revoke
    pub access_token: String,
}

/// Token pair returned by login and reissue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    /// Always "Bearer"
    pub grant_type: String,
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute expiry of the refresh token
    pub refresh_expires_at: chrono::DateTime<chrono::Utc>,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            grant_type: pair.grant_type,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            refresh_expires_at: pair.refresh_expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}
