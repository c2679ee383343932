//! Domain wrapper around the TTL store's session namespaces

use std::sync::Arc;
use std::time::Duration;

use crate::errors::DomainResult;
use crate::repositories::session::TtlStore;

/// Key prefix for per-identity refresh token entries
pub const REFRESH_TOKEN_KEY_PREFIX: &str = "RT:";

/// Sentinel value stored under denylisted access tokens
pub const LOGOUT_SENTINEL: &str = "logout";

/// Session store holding refresh tokens and the access-token denylist
///
/// Two namespaces share one TTL store: `RT:<user_id>` maps an identity to
/// its single live refresh token, and a raw access token string maps to the
/// `"logout"` sentinel once it has been revoked before natural expiry. Both
/// kinds of entries expire on their own, so nothing ever needs sweeping.
pub struct SessionStore<S: TtlStore> {
    store: Arc<S>,
}

impl<S: TtlStore> SessionStore<S> {
    /// Creates a new session store over the given TTL store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stores the identity's current refresh token, replacing any previous one
    ///
    /// Last writer wins: a racing login or reissue for the same identity
    /// leaves whichever token landed last as the only usable one.
    pub async fn store_refresh_token(
        &self,
        user_id: &str,
        refresh_token: &str,
        ttl: Duration,
    ) -> DomainResult<()> {
        let key = Self::refresh_token_key(user_id);
        self.store.set(&key, refresh_token, ttl).await
    }

    /// Fetches the identity's current refresh token, if any
    pub async fn fetch_refresh_token(&self, user_id: &str) -> DomainResult<Option<String>> {
        let key = Self::refresh_token_key(user_id);
        self.store.get(&key).await
    }

    /// Removes the identity's refresh token
    ///
    /// Removing an absent entry is not an error, which keeps logout
    /// idempotent.
    pub async fn remove_refresh_token(&self, user_id: &str) -> DomainResult<bool> {
        let key = Self::refresh_token_key(user_id);
        self.store.delete(&key).await
    }

    /// Puts an access token on the denylist for the rest of its natural life
    pub async fn deny_access_token(
        &self,
        access_token: &str,
        ttl: Duration,
    ) -> DomainResult<()> {
        self.store.set(access_token, LOGOUT_SENTINEL, ttl).await
    }

    /// Checks whether an access token has been denylisted
    pub async fn is_access_token_denied(&self, access_token: &str) -> DomainResult<bool> {
        Ok(self.store.get(access_token).await?.is_some())
    }

    fn refresh_token_key(user_id: &str) -> String {
        format!("{}{}", REFRESH_TOKEN_KEY_PREFIX, user_id)
    }
}

impl<S: TtlStore> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
