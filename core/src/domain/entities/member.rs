//! Member entity representing a registered account in the BiteLog system.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::identity::Identity;

/// Represents the authority level of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// A regular member logging their own meals
    User,
    /// An administrator with access to member management routes
    Admin,
}

impl Role {
    /// Returns the role name as it appears in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parses a role name as it appears in token claims
    ///
    /// # Returns
    ///
    /// `Some(Role)` for a known role name, `None` otherwise
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the member
    pub id: Uuid,

    /// Login user id chosen at registration
    pub user_id: String,

    /// Bcrypt hash of the member's password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Authority level of the member
    pub role: Role,

    /// Timestamp when the member was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the member was last updated
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new Member instance with the default `User` role
    pub fn new(user_id: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            password_hash,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new Member instance with an explicit role
    pub fn with_role(user_id: String, password_hash: String, role: Role) -> Self {
        let mut member = Self::new(user_id, password_hash);
        member.role = role;
        member
    }

    /// Promotes the member to administrator
    pub fn promote_to_admin(&mut self) {
        self.role = Role::Admin;
        self.updated_at = Utc::now();
    }

    /// Checks if the member is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Returns the role names granted to this member, as stored in claims
    pub fn role_names(&self) -> Vec<String> {
        vec![self.role.as_str().to_string()]
    }

    /// Returns the identity this member authenticates as
    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id.clone(), vec![self.role])
    }
}
