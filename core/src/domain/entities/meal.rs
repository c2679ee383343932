//! Meal entity representing a single logged meal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which meal of the day was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Returns the wire name of the meal type
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Parses a wire name into a meal type
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

/// How much was eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Light,
    Regular,
    Large,
}

impl Quantity {
    /// Returns the wire name of the quantity
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Light => "light",
            Quantity::Regular => "regular",
            Quantity::Large => "large",
        }
    }

    /// Parses a wire name into a quantity
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Quantity::Light),
            "regular" => Some(Quantity::Regular),
            "large" => Some(Quantity::Large),
            _ => None,
        }
    }
}

/// Meal entity representing a single logged meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier for the meal
    pub id: Uuid,

    /// Member this meal belongs to
    pub member_id: Uuid,

    /// Which meal of the day
    pub meal_type: MealType,

    /// How much was eaten
    pub quantity: Quantity,

    /// Timestamp when the meal was logged
    pub created_at: DateTime<Utc>,

    /// Timestamp when the meal was last updated
    pub updated_at: DateTime<Utc>,
}

impl Meal {
    /// Creates a new Meal instance
    pub fn new(member_id: Uuid, meal_type: MealType, quantity: Quantity) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            member_id,
            meal_type,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the meal's type and quantity
    pub fn update(&mut self, meal_type: MealType, quantity: Quantity) {
        self.meal_type = meal_type;
        self.quantity = quantity;
        self.updated_at = Utc::now();
    }

    /// Checks if the meal belongs to the given member
    pub fn is_owned_by(&self, member_id: Uuid) -> bool {
        self.member_id == member_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meal_creation() {
        let member_id = Uuid::new_v4();
        let meal = Meal::new(member_id, MealType::Breakfast, Quantity::Regular);

        assert_eq!(meal.member_id, member_id);
        assert_eq!(meal.meal_type, MealType::Breakfast);
        assert_eq!(meal.quantity, Quantity::Regular);
        assert_eq!(meal.created_at, meal.updated_at);
    }

    #[test]
    fn test_meal_update() {
        let member_id = Uuid::new_v4();
        let mut meal = Meal::new(member_id, MealType::Lunch, Quantity::Light);

        meal.update(MealType::Dinner, Quantity::Large);

        assert_eq!(meal.meal_type, MealType::Dinner);
        assert_eq!(meal.quantity, Quantity::Large);
        assert!(meal.updated_at >= meal.created_at);
    }

    #[test]
    fn test_meal_ownership() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let meal = Meal::new(owner, MealType::Snack, Quantity::Light);

        assert!(meal.is_owned_by(owner));
        assert!(!meal.is_owned_by(stranger));
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!(MealType::parse("breakfast"), Some(MealType::Breakfast));
        assert_eq!(MealType::parse("snack"), Some(MealType::Snack));
        assert_eq!(MealType::parse("brunch"), None);
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(Quantity::parse("light"), Some(Quantity::Light));
        assert_eq!(Quantity::parse("large"), Some(Quantity::Large));
        assert_eq!(Quantity::parse("huge"), None);
    }

    #[test]
    fn test_meal_serialization() {
        let meal = Meal::new(Uuid::new_v4(), MealType::Dinner, Quantity::Regular);

        let json = serde_json::to_string(&meal).unwrap();
        assert!(json.contains("\"meal_type\":\"dinner\""));
        assert!(json.contains("\"quantity\":\"regular\""));

        let deserialized: Meal = serde_json::from_str(&json).unwrap();
        assert_eq!(meal, deserialized);
    }
}
