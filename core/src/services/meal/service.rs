//! Meal service implementation with per-member ownership enforcement

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::meal::{Meal, MealType, Quantity};
use crate::domain::entities::member::Member;
use crate::domain::value_objects::identity::Identity;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::meal::MealRepository;
use crate::repositories::member::MemberRepository;

/// Service for logging and managing meals
///
/// Every operation acts on behalf of an authenticated identity. Meals that
/// belong to another member are reported as not found rather than forbidden,
/// so callers cannot probe which meal ids exist.
pub struct MealService<L: MealRepository, M: MemberRepository> {
    /// Repository for meal persistence
    meal_repository: Arc<L>,
    /// Repository for resolving identities to member records
    member_repository: Arc<M>,
}

impl<L: MealRepository, M: MemberRepository> MealService<L, M> {
    /// Create a new meal service
    pub fn new(meal_repository: Arc<L>, member_repository: Arc<M>) -> Self {
        Self {
            meal_repository,
            member_repository,
        }
    }

    /// Log a new meal for the authenticated member
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated caller
    /// * `meal_type` - Which meal of the day this entry records
    /// * `quantity` - How much was eaten
    ///
    /// # Errors
    ///
    /// * `AuthError::MemberNotFound` - The caller's account no longer exists
    pub async fn log_meal(
        &self,
        identity: &Identity,
        meal_type: MealType,
        quantity: Quantity,
    ) -> DomainResult<Meal> {
        // Step 1: Resolve the caller to a member record
        let member = self.resolve_member(identity).await?;

        // Step 2: Persist the new entry
        let meal = Meal::new(member.id, meal_type, quantity);
        let created = self.meal_repository.create(meal).await?;

        tracing::info!(
            user_id = %identity.user_id,
            meal_id = %created.id,
            meal_type = created.meal_type.as_str(),
            event = "meal_logged",
            "Meal logged"
        );

        Ok(created)
    }

    /// Change the type and quantity of an existing meal
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such meal, or it belongs to someone else
    pub async fn update_meal(
        &self,
        identity: &Identity,
        meal_id: Uuid,
        meal_type: MealType,
        quantity: Quantity,
    ) -> DomainResult<Meal> {
        // Step 1: Resolve the caller and load the meal under their ownership
        let member = self.resolve_member(identity).await?;
        let mut meal = self.owned_meal(&member, meal_id).await?;

        // Step 2: Apply the change
        meal.update(meal_type, quantity);
        let updated = self.meal_repository.update(meal).await?;

        tracing::info!(
            user_id = %identity.user_id,
            meal_id = %meal_id,
            event = "meal_updated",
            "Meal updated"
        );

        Ok(updated)
    }

    /// Remove a meal from the caller's log
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such meal, or it belongs to someone else
    pub async fn delete_meal(&self, identity: &Identity, meal_id: Uuid) -> DomainResult<()> {
        // Step 1: Resolve the caller and confirm ownership before deleting
        let member = self.resolve_member(identity).await?;
        self.owned_meal(&member, meal_id).await?;

        // Step 2: Delete the entry
        self.meal_repository.delete(meal_id).await?;

        tracing::info!(
            user_id = %identity.user_id,
            meal_id = %meal_id,
            event = "meal_deleted",
            "Meal deleted"
        );

        Ok(())
    }

    /// List the meal log of the member named in the request path, newest first
    ///
    /// # Errors
    ///
    /// * `AuthError::SelfAccessOnly` - Caller asked for another member's log
    /// * `AuthError::MemberNotFound` - The caller's account no longer exists
    pub async fn meal_log(
        &self,
        identity: &Identity,
        path_user_id: &str,
    ) -> DomainResult<Vec<Meal>> {
        // Step 1: Only the owner may read the log
        if identity.user_id != path_user_id {
            return Err(DomainError::Auth(AuthError::SelfAccessOnly));
        }

        // Step 2: Resolve and fetch
        let member = self.resolve_member(identity).await?;
        self.meal_repository.find_by_member(member.id).await
    }

    /// Look up the member record behind an authenticated identity
    async fn resolve_member(&self, identity: &Identity) -> DomainResult<Member> {
        self.member_repository
            .find_by_user_id(&identity.user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::MemberNotFound))
    }

    /// Fetch a meal only if it belongs to the given member
    ///
    /// Foreign and missing meals produce the same not-found error.
    async fn owned_meal(&self, member: &Member, meal_id: Uuid) -> DomainResult<Meal> {
        let meal = self
            .meal_repository
            .find_by_id(meal_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "meal".to_string(),
            })?;

        if !meal.is_owned_by(member.id) {
            return Err(DomainError::NotFound {
                resource: "meal".to_string(),
            });
        }

        Ok(meal)
    }
}
