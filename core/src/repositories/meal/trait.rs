//! Meal repository trait defining the interface for meal data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::meal::Meal;
use crate::errors::DomainError;

/// Repository trait for Meal entity persistence operations
#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Create a new meal in the repository
    async fn create(&self, meal: Meal) -> Result<Meal, DomainError>;

    /// Find a meal by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Meal>, DomainError>;

    /// List all meals logged by a member, newest first
    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<Meal>, DomainError>;

    /// Update an existing meal
    ///
    /// # Returns
    /// * `Ok(Meal)` - The updated meal
    /// * `Err(DomainError)` - Update failed (e.g. meal not found)
    async fn update(&self, meal: Meal) -> Result<Meal, DomainError>;

    /// Delete a meal from the repository
    ///
    /// # Returns
    /// * `Ok(true)` - Meal was deleted
    /// * `Ok(false)` - Meal not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
