//! Main token service implementation

use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::member::Role;
use crate::domain::entities::token::{Claims, TokenPair, JWT_ISSUER};
use crate::domain::value_objects::identity::Identity;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and validating JWT tokens
///
/// Validation is a pure function of the token and the signing key. The
/// service performs no I/O, so the authentication gate can call it on every
/// request.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    // Same checks minus expiry; reissue resolves identity from access
    // tokens that may already have lapsed.
    claims_only_validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        let mut claims_only_validation = Validation::new(config.algorithm);
        claims_only_validation.set_issuer(&[JWT_ISSUER]);
        claims_only_validation.validate_exp = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            claims_only_validation,
        }
    }

    /// Issues a new access/refresh token pair for the given identity
    ///
    /// The access token carries the identity's role names and a short
    /// expiry; the refresh token carries no roles and a long expiry. Both
    /// are signed with the process-wide secret.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The minted pair with the refresh token's absolute expiry
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_pair(&self, identity: &Identity) -> DomainResult<TokenPair> {
        let access_claims = Claims::new_access_token(
            identity.user_id.clone(),
            identity.role_names(),
            Duration::minutes(self.config.access_token_expiry_minutes),
        );
        let refresh_claims = Claims::new_refresh_token(
            identity.user_id.clone(),
            Duration::days(self.config.refresh_token_expiry_days),
        );

        let access_token = self.encode_jwt(&access_claims)?;
        let refresh_token = self.encode_jwt(&refresh_claims)?;

        let refresh_expires_at = Utc
            .timestamp_opt(refresh_claims.exp, 0)
            .single()
            .ok_or_else(|| DomainError::Internal {
                message: "Invalid refresh expiry timestamp".to_string(),
            })?;

        Ok(TokenPair::new(access_token, refresh_token, refresh_expires_at))
    }

    /// Verifies signature, issuer, and expiry
    ///
    /// Fails closed: malformed input, a bad signature, and an elapsed
    /// expiry all come back as `false`, never as an error.
    pub fn validate(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Decodes and fully validates a token, returning its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if the token is valid
    /// * `Err(DomainError)` - Token is malformed, tampered, or expired
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(
                    error = ?e.kind(),
                    event = "token_rejected",
                    "Token failed validation"
                );
                DomainError::Token(TokenError::InvalidToken)
            })?;

        Ok(token_data.claims)
    }

    /// Reconstructs the caller's identity from an access token's claims
    ///
    /// The expiry check is disabled here: the reissue flow must resolve the
    /// identity from an access token that may already have lapsed. Signature
    /// and issuer checks still apply.
    ///
    /// # Returns
    ///
    /// * `Ok(Identity)` - The caller's user id and roles
    /// * `Err(DomainError)` - Token is malformed or its claims are unusable
    pub fn authenticate(&self, token: &str) -> DomainResult<Identity> {
        let claims = self.decode_claims_only(token)?;

        if claims.roles.is_empty() {
            return Err(DomainError::Token(TokenError::MissingClaim {
                claim: "roles".to_string(),
            }));
        }

        let roles = claims
            .roles
            .iter()
            .map(|name| Role::parse(name))
            .collect::<Option<Vec<Role>>>()
            .ok_or(DomainError::Token(TokenError::MalformedClaims))?;

        Ok(Identity::new(claims.sub, roles))
    }

    /// Remaining time-to-live of a token, used to size denylist entries
    ///
    /// Returns zero once the token has lapsed rather than an error, so the
    /// expiry check is disabled for the decode as well.
    pub fn remaining_lifetime(&self, token: &str) -> DomainResult<Duration> {
        let claims = self.decode_claims_only(token)?;
        Ok(claims.remaining_lifetime())
    }

    /// Decodes a token with the expiry check disabled
    fn decode_claims_only(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.claims_only_validation)
            .map_err(|e| {
                tracing::debug!(
                    error = ?e.kind(),
                    event = "claims_rejected",
                    "Token claims could not be extracted"
                );
                DomainError::Token(TokenError::InvalidToken)
            })?;

        Ok(token_data.claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
