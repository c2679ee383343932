//! Cache module for Redis-based session storage
//!
//! Provides the Redis client with retry logic plus the TTL store adapter
//! that the core session layer persists refresh tokens and denylisted
//! access tokens through.

pub mod redis_client;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use session_store::RedisTtlStore;

// Re-export commonly used types
pub use bl_shared::config::cache::CacheConfig;
