//! Mock implementation of MealRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::meal::Meal;
use crate::errors::DomainError;

use super::trait_::MealRepository;

/// Mock meal repository for testing
pub struct MockMealRepository {
    meals: Arc<RwLock<HashMap<Uuid, Meal>>>,
}

impl MockMealRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            meals: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockMealRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MealRepository for MockMealRepository {
    async fn create(&self, meal: Meal) -> Result<Meal, DomainError> {
        let mut meals = self.meals.write().await;
        meals.insert(meal.id, meal.clone());
        Ok(meal)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Meal>, DomainError> {
        let meals = self.meals.read().await;
        Ok(meals.get(&id).cloned())
    }

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<Meal>, DomainError> {
        let meals = self.meals.read().await;
        let mut logged: Vec<Meal> = meals
            .values()
            .filter(|m| m.member_id == member_id)
            .cloned()
            .collect();
        logged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(logged)
    }

    async fn update(&self, meal: Meal) -> Result<Meal, DomainError> {
        let mut meals = self.meals.write().await;

        if !meals.contains_key(&meal.id) {
            return Err(DomainError::NotFound {
                resource: "meal".to_string(),
            });
        }

        meals.insert(meal.id, meal.clone());
        Ok(meal)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut meals = self.meals.write().await;
        Ok(meals.remove(&id).is_some())
    }
}
