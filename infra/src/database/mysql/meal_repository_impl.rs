//! MySQL implementation of the MealRepository trait.
//!
//! Concrete meal persistence using SQLx. Meal type and quantity are stored
//! as their lowercase names, UUIDs as 36-character strings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bl_core::domain::entities::meal::{Meal, MealType, Quantity};
use bl_core::errors::DomainError;
use bl_core::repositories::meal::MealRepository;

/// MySQL implementation of MealRepository
pub struct MySqlMealRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlMealRepository {
    /// Create a new MySQL meal repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Meal entity
    fn row_to_meal(row: &sqlx::mysql::MySqlRow) -> Result<Meal, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let member_id: String = row.try_get("member_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get member_id: {}", e),
        })?;

        let meal_type_str: String =
            row.try_get("meal_type").map_err(|e| DomainError::Internal {
                message: format!("Failed to get meal_type: {}", e),
            })?;

        let quantity_str: String = row.try_get("quantity").map_err(|e| DomainError::Internal {
            message: format!("Failed to get quantity: {}", e),
        })?;

        Ok(Meal {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid meal UUID: {}", e),
            })?,
            member_id: Uuid::parse_str(&member_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid member UUID: {}", e),
            })?,
            meal_type: MealType::parse(&meal_type_str).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown meal type stored: {}", meal_type_str),
            })?,
            quantity: Quantity::parse(&quantity_str).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown quantity stored: {}", quantity_str),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl MealRepository for MySqlMealRepository {
    async fn create(&self, meal: Meal) -> Result<Meal, DomainError> {
        let query = r#"
            INSERT INTO meals (
                id, member_id, meal_type, quantity, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(meal.id.to_string())
            .bind(meal.member_id.to_string())
            .bind(meal.meal_type.as_str())
            .bind(meal.quantity.as_str())
            .bind(meal.created_at)
            .bind(meal.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create meal: {}", e),
            })?;

        Ok(meal)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Meal>, DomainError> {
        let query = r#"
            SELECT id, member_id, meal_type, quantity, created_at, updated_at
            FROM meals
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find meal by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_meal(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<Meal>, DomainError> {
        let query = r#"
            SELECT id, member_id, meal_type, quantity, created_at, updated_at
            FROM meals
            WHERE member_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(member_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list meals: {}", e),
            })?;

        rows.iter().map(Self::row_to_meal).collect()
    }

    async fn update(&self, meal: Meal) -> Result<Meal, DomainError> {
        let query = r#"
            UPDATE meals SET
                meal_type = ?,
                quantity = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(meal.meal_type.as_str())
            .bind(meal.quantity.as_str())
            .bind(meal.updated_at)
            .bind(meal.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update meal: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "meal".to_string(),
            });
        }

        Ok(meal)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM meals WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete meal: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
