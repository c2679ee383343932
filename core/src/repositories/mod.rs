pub mod meal;
pub mod member;
pub mod session;

pub use meal::{MealRepository, MockMealRepository};
pub use member::{MemberRepository, MockMemberRepository};
pub use session::{InMemoryTtlStore, TtlStore};
