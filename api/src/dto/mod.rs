pub mod auth;
pub mod error;
pub mod meal;
pub mod member;

pub use auth::*;
pub use error::*;
pub use meal::*;
pub use member::*;
