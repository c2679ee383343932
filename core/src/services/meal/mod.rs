//! Meal logging service
//!
//! Create, update, delete and list meals on behalf of the authenticated
//! member, with strict ownership checks.

mod service;


pub use service::MealService;
