//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "bitelog";

/// Grant type reported alongside every issued token pair
pub const GRANT_TYPE_BEARER: &str = "Bearer";

/// Claims structure for JWT payload
///
/// Access tokens carry the caller's granted role names in `roles`; refresh
/// tokens carry none, so the claim is omitted from their JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the member's login user id)
    pub sub: String,

    /// Granted role names (empty for refresh tokens)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Unique token identifier
    ///
    /// Keeps two tokens minted within the same second from being
    /// byte-identical, which the denylist relies on.
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The member's login user id
    /// * `roles` - Role names granted to the member
    /// * `valid_for` - How long the token stays valid
    ///
    /// # Returns
    ///
    /// A new `Claims` instance for an access token
    pub fn new_access_token(
        user_id: impl Into<String>,
        roles: Vec<String>,
        valid_for: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + valid_for;

        Self {
            sub: user_id.into(),
            roles,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// Refresh tokens never carry roles; they are only good for minting a
    /// fresh access token, never for passing the authentication gate.
    pub fn new_refresh_token(user_id: impl Into<String>, valid_for: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + valid_for;

        Self {
            sub: user_id.into(),
            roles: Vec::new(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Gets the time remaining until expiration
    ///
    /// # Returns
    ///
    /// A `Duration` representing the time until expiration, or zero if expired
    pub fn remaining_lifetime(&self) -> Duration {
        let now = Utc::now().timestamp();
        if self.exp > now {
            Duration::seconds(self.exp - now)
        } else {
            Duration::zero()
        }
    }
}

/// Token pair returned to the client at login and reissue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Grant type (always "Bearer")
    pub grant_type: String,

    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Absolute instant at which the refresh token expires
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenPair {
    /// Creates a new token pair
    ///
    /// # Arguments
    ///
    /// * `access_token` - The JWT access token
    /// * `refresh_token` - The JWT refresh token
    /// * `refresh_expires_at` - Absolute expiry instant of the refresh token
    ///
    /// # Returns
    ///
    /// A new `TokenPair` instance
    pub fn new(
        access_token: String,
        refresh_token: String,
        refresh_expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            grant_type: GRANT_TYPE_BEARER.to_string(),
            access_token,
            refresh_token,
            refresh_expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let claims = Claims::new_access_token(
            "alice_01",
            vec!["USER".to_string()],
            Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
        );

        assert_eq!(claims.sub, "alice_01");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.roles, vec!["USER".to_string()]);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_claims_carry_no_roles() {
        let claims = Claims::new_refresh_token(
            "alice_01",
            Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        );

        assert_eq!(claims.sub, "alice_01");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert!(claims.roles.is_empty());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new_access_token(
            "alice_01",
            vec!["USER".to_string()],
            Duration::minutes(5),
        );

        // Set expiration to past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert_eq!(claims.remaining_lifetime(), Duration::zero());
    }

    #[test]
    fn test_claims_remaining_lifetime() {
        let claims = Claims::new_access_token(
            "alice_01",
            vec!["USER".to_string()],
            Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
        );

        let remaining = claims.remaining_lifetime();
        let expected_max = Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES);
        let expected_min = Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES - 1);

        assert!(remaining <= expected_max);
        assert!(remaining > expected_min);
    }

    #[test]
    fn test_tokens_minted_together_stay_distinct() {
        let first = Claims::new_access_token(
            "alice_01",
            vec!["USER".to_string()],
            Duration::minutes(30),
        );
        let second = Claims::new_access_token(
            "alice_01",
            vec!["USER".to_string()],
            Duration::minutes(30),
        );

        assert_ne!(first.jti, second.jti);
        assert_ne!(first, second);
    }

    #[test]
    fn test_roles_claim_omitted_when_empty() {
        let claims = Claims::new_refresh_token("alice_01", Duration::days(7));

        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("roles"));

        // And a payload without a roles key deserializes to an empty list
        let deserialized: Claims = serde_json::from_str(&json).unwrap();
        assert!(deserialized.roles.is_empty());
    }

    #[test]
    fn test_token_pair_creation() {
        let expires_at = Utc::now() + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS);
        let pair = TokenPair::new(
            "access_token_jwt".to_string(),
            "refresh_token_jwt".to_string(),
            expires_at,
        );

        assert_eq!(pair.grant_type, GRANT_TYPE_BEARER);
        assert_eq!(pair.access_token, "access_token_jwt");
        assert_eq!(pair.refresh_token, "refresh_token_jwt");
        assert_eq!(pair.refresh_expires_at, expires_at);
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new(
            "access_token".to_string(),
            "refresh_token".to_string(),
            Utc::now() + Duration::days(7),
        );

        let json = serde_json::to_string(&pair).unwrap();
        assert!(json.contains("\"grant_type\":\"Bearer\""));

        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access_token(
            "bob_admin",
            vec!["ADMIN".to_string()],
            Duration::minutes(30),
        );

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
