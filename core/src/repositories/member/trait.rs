//! Member repository trait defining the interface for member data persistence.
//!
//! This module defines the repository pattern interface for Member entities.
//! The trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

/// Repository trait for Member entity persistence operations
///
/// Implementations handle the actual database access while keeping the
/// domain layer free of storage concerns.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Create a new member in the repository
    ///
    /// # Arguments
    /// * `member` - The Member entity to persist
    ///
    /// # Returns
    /// * `Ok(Member)` - The created member
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate user id)
    async fn create(&self, member: Member) -> Result<Member, DomainError>;

    /// Find a member by their login user id
    ///
    /// # Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - No member with the given user id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Member>, DomainError>;

    /// Find a member by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError>;

    /// Check if a member exists with the given login user id
    async fn exists_by_user_id(&self, user_id: &str) -> Result<bool, DomainError>;

    /// List all registered members
    async fn list(&self) -> Result<Vec<Member>, DomainError>;

    /// Delete a member from the repository
    ///
    /// # Returns
    /// * `Ok(true)` - Member was deleted
    /// * `Ok(false)` - Member not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
