use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{UserId, UserRole};

/// User - a host, guest, or administrator.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub role: String, // 'host', 'guest', 'admin'
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl User {
    pub async fn find_by_id(id: UserId, pool: &PgPool) -> Result<Self> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(user)
    }

    /// All users with the given role (explorer users taxonomy leaf).
    pub async fn find_by_role(role: UserRole, pool: &PgPool) -> Result<Vec<Self>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE role = $1 ORDER BY created_at DESC",
        )
        .bind(role.to_string())
        .fetch_all(pool)
        .await?;
        Ok(users)
    }

    pub async fn create(
        display_name: String,
        email: String,
        role: UserRole,
        pool: &PgPool,
    ) -> Result<Self> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, display_name, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(UserId::new())
        .bind(display_name)
        .bind(email.to_lowercase())
        .bind(role.to_string())
        .fetch_one(pool)
        .await?;
        Ok(user)
    }
}
