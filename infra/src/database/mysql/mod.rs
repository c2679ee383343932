//! MySQL repository implementations

pub mod meal_repository_impl;
pub mod member_repository_impl;

pub use meal_repository_impl::MySqlMealRepository;
pub use member_repository_impl::MySqlMemberRepository;
