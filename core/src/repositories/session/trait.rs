//! TTL-aware key-value store abstraction backing the session layer.
//!
//! The session layer keeps two kinds of entries in such a store: the current
//! refresh token per identity and the access-token denylist. Both rely on the
//! store expiring entries on its own once their time-to-live has elapsed.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::DomainError;

/// TTL-aware key-value store
///
/// `set` overwrites unconditionally; whichever write lands last wins. An
/// expired key behaves exactly like an absent one.
#[async_trait]
pub trait TtlStore: Send + Sync {
    /// Store a value under a key, expiring after `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Fetch the value stored under a key
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key present and not expired
    /// * `Ok(None)` - Key absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Delete a key
    ///
    /// # Returns
    /// * `Ok(true)` - Key was present and deleted
    /// * `Ok(false)` - Key was absent
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}
