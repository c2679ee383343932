//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence and caching ports defined in
//! `bl_core`:
//!
//! - **Database**: MySQL repositories for members and meals using SQLx
//! - **Cache**: Redis client backing the session store (refresh tokens and
//!   the access-token denylist)
//!
//! The crate exposes constructors that take configuration structs from
//! `bl_shared` and hands back ready-to-use clients and repositories.

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and TTL store
pub mod cache;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
