//! Response bodies for member routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bl_core::domain::entities::member::{Member, Role};

/// Member summary; the password hash never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub user_id: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            user_id: member.user_id,
            role: member.role,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

/// Admin listing of all registered members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
    pub total: usize,
}

impl MemberListResponse {
    pub fn new(members: Vec<Member>) -> Self {
        let members: Vec<MemberResponse> = members.into_iter().map(Into::into).collect();
        let total = members.len();
        Self { members, total }
    }
}
