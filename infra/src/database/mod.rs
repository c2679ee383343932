//! Database module - MySQL implementations using SQLx
//!
//! Provides connection pool management plus the MySQL-backed repository
//! implementations for members and meals.

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlMealRepository, MySqlMemberRepository};
