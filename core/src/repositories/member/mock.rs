//! Mock implementation of MemberRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

use super::trait_::MemberRepository;

/// Mock member repository for testing
pub struct MockMemberRepository {
    members: Arc<RwLock<HashMap<Uuid, Member>>>,
}

impl MockMemberRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            members: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        // Check for duplicate user id
        if members.values().any(|m| m.user_id == member.user_id) {
            return Err(DomainError::Validation {
                message: "User id already exists".to_string(),
            });
        }

        members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.values().find(|m| m.user_id == user_id).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn exists_by_user_id(&self, user_id: &str) -> Result<bool, DomainError> {
        let members = self.members.read().await;
        Ok(members.values().any(|m| m.user_id == user_id))
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let members = self.members.read().await;
        let mut all: Vec<Member> = members.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut members = self.members.write().await;
        Ok(members.remove(&id).is_some())
    }
}
