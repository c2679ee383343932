//! Authenticated caller identity value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::member::Role;

/// Identity of an authenticated caller
///
/// Reconstructed from access token claims by the token service and attached
/// to the request by the authentication gate. Carries the login user id and
/// the roles granted when the token was issued, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Login user id (the token's subject)
    pub user_id: String,

    /// Roles granted to the caller
    pub roles: Vec<Role>,
}

impl Identity {
    /// Creates a new identity
    pub fn new(user_id: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id: user_id.into(),
            roles,
        }
    }

    /// Checks if the identity holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Checks if the identity holds any of the given roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    /// Checks if the identity is an administrator
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Returns the role names as stored in claims
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|role| role.as_str().to_string()).collect()
    }
}
