//! Authentication route handlers
//!
//! This module contains the session lifecycle endpoints:
//! - Member registration (join)
//! - Login with credential verification
//! - Logout with token revocation
//! - Token pair reissue with refresh-token rotation

pub mod join;
pub mod login;
pub mod logout;
pub mod reissue;
