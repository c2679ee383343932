//! Meal route handlers
//!
//! All four operations act on the authenticated caller's own meals; a meal
//! belonging to someone else reads as missing.

pub mod add;
pub mod delete;
pub mod log;
pub mod update;
