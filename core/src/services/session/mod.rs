//! Session store module
//!
//! Wraps the TTL store with the two namespaces the session layer needs:
//! per-identity refresh tokens and the access-token denylist.

mod store;

#[cfg(test)]
mod tests;

pub use store::{SessionStore, LOGOUT_SENTINEL, REFRESH_TOKEN_KEY_PREFIX};
