//! Business services containing domain logic and use cases.

pub mod auth;
pub mod meal;
pub mod member;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use meal::MealService;
pub use member::MemberService;
pub use session::SessionStore;
pub use token::{TokenService, TokenServiceConfig};
