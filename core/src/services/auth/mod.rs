//! Authentication service module
//!
//! This module provides the session orchestration flows:
//! - Member registration (join)
//! - Login with credential verification
//! - Logout with refresh-token removal and access-token denylisting
//! - Token pair reissue with refresh-token rotation

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
