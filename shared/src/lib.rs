//! Shared utilities and common types for the BiteLog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from environment variables
//! - Validation utilities (user id and password rules)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, CacheConfig, DatabaseConfig, ServerConfig};
pub use utils::validation;
