//! Token service module for JWT management
//!
//! This module handles all token codec operations:
//! - Access and refresh token minting (HS256)
//! - Signature and expiry validation
//! - Identity reconstruction from claims, with the expiry check disabled
//!   for the reissue flow
//! - Remaining-lifetime computation used to size denylist entries

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
