//! Member route handlers
//!
//! - Own profile lookup (self-access only)
//! - Admin listing of all members

pub mod list;
pub mod profile;
