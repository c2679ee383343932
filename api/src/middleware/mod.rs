pub mod auth;
pub mod cors;
pub mod policy;
pub mod security;

pub use auth::*;
pub use cors::*;
pub use policy::*;
pub use security::*;
