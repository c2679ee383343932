//! Request and response bodies for meal routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bl_core::domain::entities::meal::{Meal, MealType, Quantity};

/// Body for logging a new meal
///
/// `meal_type` and `quantity` deserialize straight into the domain enums,
/// so unknown values are rejected before the handler runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMealRequest {
    pub meal_type: MealType,
    pub quantity: Quantity,
}

/// Body for updating an existing meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMealRequest {
    pub meal_type: MealType,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub meal_type: MealType,
    pub quantity: Quantity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Meal> for MealResponse {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id,
            member_id: meal.member_id,
            meal_type: meal.meal_type,
            quantity: meal.quantity,
            created_at: meal.created_at,
            updated_at: meal.updated_at,
        }
    }
}

/// A member's meal log, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLogResponse {
    pub meals: Vec<MealResponse>,
    pub total: usize,
}

impl MealLogResponse {
    pub fn new(meals: Vec<Meal>) -> Self {
        let meals: Vec<MealResponse> = meals.into_iter().map(Into::into).collect();
        let total = meals.len();
        Self { meals, total }
    }
}

/// Plain confirmation body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
