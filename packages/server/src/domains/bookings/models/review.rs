use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{ListingKind, ReviewId, UserId};

/// Review - a guest's rating of a property or service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub author_id: UserId,
    pub item_type: String,
    pub item_id: Uuid,
    pub rating: i32, // 1..5, enforced by the table
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Review {
    pub async fn create(
        author_id: UserId,
        kind: ListingKind,
        item_id: Uuid,
        rating: i32,
        comment: String,
        pool: &PgPool,
    ) -> Result<Self> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, author_id, item_type, item_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(ReviewId::new())
        .bind(author_id)
        .bind(kind.to_string())
        .bind(item_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(pool)
        .await?;
        Ok(review)
    }

    pub async fn find_by_item(
        kind: ListingKind,
        item_id: Uuid,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE item_type = $1 AND item_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(kind.to_string())
        .bind(item_id)
        .fetch_all(pool)
        .await?;
        Ok(reviews)
    }
}
