//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_JWT_SECRET: &str = "change-this-secret-in-production";

/// JWT signing and password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing JWT tokens (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// Bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 7,
            bcrypt_cost: 12,
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let access_token_expiry_minutes = std::env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let refresh_token_expiry_days = std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .unwrap_or(12);

        Self {
            jwt_secret,
            access_token_expiry_minutes,
            refresh_token_expiry_days,
            bcrypt_cost,
        }
    }

    /// Check if using the default secret (security warning at startup)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
