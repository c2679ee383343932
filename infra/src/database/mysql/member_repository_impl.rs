//! MySQL implementation of the MemberRepository trait.
//!
//! Concrete member persistence using SQLx. UUIDs are stored as their
//! 36-character string form and roles as their uppercase names.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bl_core::domain::entities::member::{Member, Role};
use bl_core::errors::DomainError;
use bl_core::repositories::member::MemberRepository;

/// MySQL implementation of MemberRepository
pub struct MySqlMemberRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    /// Create a new MySQL member repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Member entity
    fn row_to_member(row: &sqlx::mysql::MySqlRow) -> Result<Member, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let role_str: String = row.try_get("role").map_err(|e| DomainError::Internal {
            message: format!("Failed to get role: {}", e),
        })?;

        let role = Role::parse(&role_str).ok_or_else(|| DomainError::Internal {
            message: format!("Unknown role stored for member: {}", role_str),
        })?;

        Ok(Member {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid member UUID: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get user_id: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            role,
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
impl MemberRepository for MySqlMemberRepository {
    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        // Check for duplicate user id first
        if self.exists_by_user_id(&member.user_id).await? {
            return Err(DomainError::Validation {
                message: "User id already registered".to_string(),
            });
        }

        let query = r#"
            INSERT INTO members (
                id, user_id, password_hash, role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(member.id.to_string())
            .bind(&member.user_id)
            .bind(&member.password_hash)
            .bind(member.role.as_str())
            .bind(member.created_at)
            .bind(member.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create member: {}", e),
            })?;

        Ok(member)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Member>, DomainError> {
        let query = r#"
            SELECT id, user_id, password_hash, role, created_at, updated_at
            FROM members
            WHERE user_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find member by user id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_member(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError> {
        let query = r#"
            SELECT id, user_id, password_hash, role, created_at, updated_at
            FROM members
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find member by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_member(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_user_id(&self, user_id: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM members
                WHERE user_id = ?
            ) as member_exists
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to check member existence: {}", e),
            })?;

        let exists: i8 = result
            .try_get("member_exists")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get existence result: {}", e),
            })?;

        Ok(exists == 1)
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let query = r#"
            SELECT id, user_id, password_hash, role, created_at, updated_at
            FROM members
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list members: {}", e),
            })?;

        rows.iter().map(Self::row_to_member).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM members WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete member: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
