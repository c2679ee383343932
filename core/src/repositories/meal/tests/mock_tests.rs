//! Unit tests for mock meal repository

use uuid::Uuid;

use crate::domain::entities::meal::{Meal, MealType, Quantity};
use crate::repositories::meal::{MealRepository, MockMealRepository};

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockMealRepository::new();

    let meal = Meal::new(Uuid::new_v4(), MealType::Breakfast, Quantity::Regular);

    let created = repo.create(meal.clone()).await.unwrap();
    assert_eq!(created.id, meal.id);

    let found = repo.find_by_id(meal.id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().meal_type, MealType::Breakfast);
}

#[tokio::test]
async fn test_mock_repository_find_by_member() {
    let repo = MockMealRepository::new();

    let member_id = Uuid::new_v4();
    let other_member = Uuid::new_v4();

    repo.create(Meal::new(member_id, MealType::Breakfast, Quantity::Light))
        .await
        .unwrap();
    repo.create(Meal::new(member_id, MealType::Lunch, Quantity::Regular))
        .await
        .unwrap();
    repo.create(Meal::new(other_member, MealType::Dinner, Quantity::Large))
        .await
        .unwrap();

    let logged = repo.find_by_member(member_id).await.unwrap();
    assert_eq!(logged.len(), 2);
    assert!(logged.iter().all(|m| m.member_id == member_id));
}

#[tokio::test]
async fn test_mock_repository_update() {
    let repo = MockMealRepository::new();

    let mut meal = Meal::new(Uuid::new_v4(), MealType::Lunch, Quantity::Light);
    repo.create(meal.clone()).await.unwrap();

    meal.update(MealType::Dinner, Quantity::Large);
    let updated = repo.update(meal.clone()).await.unwrap();
    assert_eq!(updated.meal_type, MealType::Dinner);
    assert_eq!(updated.quantity, Quantity::Large);
}

#[tokio::test]
async fn test_mock_repository_update_missing_meal() {
    let repo = MockMealRepository::new();

    let meal = Meal::new(Uuid::new_v4(), MealType::Snack, Quantity::Light);
    let result = repo.update(meal).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_mock_repository_delete() {
    let repo = MockMealRepository::new();

    let meal = Meal::new(Uuid::new_v4(), MealType::Snack, Quantity::Regular);
    repo.create(meal.clone()).await.unwrap();

    assert!(repo.delete(meal.id).await.unwrap());
    assert!(!repo.delete(meal.id).await.unwrap());
}
