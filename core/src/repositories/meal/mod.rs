pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use r#trait::MealRepository;
pub use mock::MockMealRepository;

#[cfg(test)]
mod tests;
