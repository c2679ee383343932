//! In-memory TTL store for tests and local development.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::trait_::TtlStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory TTL store backed by a read-write locked map
///
/// Expiry is lazy: an expired entry is dropped when it is next read or
/// overwritten, never by a background sweeper.
pub struct InMemoryTtlStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl InMemoryTtlStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTtlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtlStore for InMemoryTtlStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(key).is_some())
    }
}
