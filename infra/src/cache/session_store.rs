//! Redis-backed TTL store for the session layer
//!
//! Adapts the [`RedisClient`] to the `TtlStore` port from `bl_core`, letting
//! the session store keep refresh tokens and the access-token denylist in
//! Redis with server-side expiry.

use std::time::Duration;

use async_trait::async_trait;

use bl_core::errors::DomainError;
use bl_core::repositories::session::TtlStore;

use crate::cache::redis_client::RedisClient;

/// TTL store implementation over Redis
///
/// Cheap to clone; clones share the client's multiplexed connection.
#[derive(Clone)]
pub struct RedisTtlStore {
    /// Underlying Redis client
    client: RedisClient,
}

impl RedisTtlStore {
    /// Create a new store over an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TtlStore for RedisTtlStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.client
            .set_with_expiry(key, value, ttl)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to write session entry: {}", e),
            })
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.client
            .get(key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to read session entry: {}", e),
            })
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.client
            .delete(key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete session entry: {}", e),
            })
    }
}
