//! Domain entities representing core business objects.

pub mod meal;
pub mod member;
pub mod token;

// Re-export commonly used types
pub use meal::{Meal, MealType, Quantity};
pub use member::{Member, Role};
pub use token::{
    Claims, TokenPair,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
    JWT_ISSUER, GRANT_TYPE_BEARER
};
