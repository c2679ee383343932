//! Member service implementation for profile reads and admin listings

use std::sync::Arc;

use crate::domain::entities::member::Member;
use crate::domain::value_objects::identity::Identity;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::member::MemberRepository;

/// Service for reading member profiles
///
/// Profile reads are self-access only: the authenticated identity must match
/// the user id taken from the request path. A mismatch is reported as
/// `AuthError::SelfAccessOnly`, which surfaces as a not-found response so
/// the existence of other accounts is never confirmed to the caller.
pub struct MemberService<M: MemberRepository> {
    /// Repository for member persistence
    member_repository: Arc<M>,
}

impl<M: MemberRepository> MemberService<M> {
    /// Create a new member service
    pub fn new(member_repository: Arc<M>) -> Self {
        Self { member_repository }
    }

    /// Fetch the profile of the member named in the request path
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated caller
    /// * `path_user_id` - The user id taken from the request path
    ///
    /// # Errors
    ///
    /// * `AuthError::SelfAccessOnly` - Caller asked for another member's profile
    /// * `AuthError::MemberNotFound` - The caller's account no longer exists
    pub async fn profile(&self, identity: &Identity, path_user_id: &str) -> DomainResult<Member> {
        // Step 1: Only the owner may read the profile
        if identity.user_id != path_user_id {
            return Err(DomainError::Auth(AuthError::SelfAccessOnly));
        }

        // Step 2: Load the member record
        let member = self
            .member_repository
            .find_by_user_id(&identity.user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::MemberNotFound))?;

        Ok(member)
    }

    /// List every registered member
    ///
    /// Role enforcement happens at the route policy, not here.
    pub async fn list_members(&self) -> DomainResult<Vec<Member>> {
        self.member_repository.list().await
    }
}
