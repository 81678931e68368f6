use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{FavoriteId, ListingKind, UserId};

/// Favorite - a user's saved listing. One row per (user, item).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub item_type: String,
    pub item_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Favorite {
    /// Save a listing. Saving twice is a no-op returning the existing row.
    pub async fn add(
        user_id: UserId,
        kind: ListingKind,
        item_id: Uuid,
        pool: &PgPool,
    ) -> Result<Self> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (id, user_id, item_type, item_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, item_type, item_id) DO UPDATE
            SET item_id = EXCLUDED.item_id
            RETURNING *
            "#,
        )
        .bind(FavoriteId::new())
        .bind(user_id)
        .bind(kind.to_string())
        .bind(item_id)
        .fetch_one(pool)
        .await?;
        Ok(favorite)
    }

    pub async fn remove(
        user_id: UserId,
        kind: ListingKind,
        item_id: Uuid,
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query(
            "DELETE FROM favorites WHERE user_id = $1 AND item_type = $2 AND item_id = $3",
        )
        .bind(user_id)
        .bind(kind.to_string())
        .bind(item_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(favorites)
    }
}
