//! Value objects representing immutable domain concepts.

pub mod identity;

// Re-export commonly used types
pub use identity::Identity;
