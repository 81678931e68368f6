use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{NotificationId, NotificationKind, UserId};

/// Notification - a user-scoped message written by the moderation and
/// engagement fan-out. Immutable after insert except for the read flag.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub kind: String, // 'info', 'success', 'warning', 'error'
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A notification about to be enqueued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewNotification {
    pub user_id: UserId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Notification {
    pub async fn create(new: NewNotification, pool: &PgPool) -> Result<Self> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, user_id, kind, title, message, link)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(NotificationId::new())
        .bind(new.user_id)
        .bind(new.kind.to_string())
        .bind(new.title)
        .bind(new.message)
        .bind(new.link)
        .fetch_one(pool)
        .await?;
        Ok(notification)
    }

    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(notifications)
    }

    /// Mark one notification read. Scoped to the owner; marking someone
    /// else's row changes nothing. There is no batch variant.
    pub async fn mark_read(id: NotificationId, user_id: UserId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    pub async fn unread_count(user_id: UserId, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND NOT read",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Unread counts for every user that has any (the 60s tick).
    pub async fn unread_counts(pool: &PgPool) -> Result<Vec<(UserId, i64)>> {
        let counts = sqlx::query_as::<_, (UserId, i64)>(
            r#"
            SELECT user_id, COUNT(*) FROM notifications
            WHERE NOT read
            GROUP BY user_id
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(counts)
    }
}
