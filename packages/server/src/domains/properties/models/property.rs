use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ListingStatus, PropertyId, UserId};

/// Property - a stay listing owned by a host (requires approval before it is
/// visible to guests).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: PropertyId,
    pub host_id: UserId,
    pub title: String,
    pub description: String,
    pub property_type: String, // 'villa', 'apartment', ... free-form, host supplied
    pub location: String,
    pub price_per_night: f64,
    pub images: Vec<String>,

    // Moderation workflow
    pub status: String, // 'pending', 'approved', 'rejected'
    pub rejection_reason: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn listing_status(&self) -> Result<ListingStatus> {
        self.status.parse()
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Property {
    pub async fn find_by_id(id: PropertyId, pool: &PgPool) -> Result<Self> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(property)
    }

    pub async fn find_by_status(status: ListingStatus, pool: &PgPool) -> Result<Vec<Self>> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status.to_string())
        .fetch_all(pool)
        .await?;
        Ok(properties)
    }

    /// Properties awaiting review, oldest submissions first.
    pub async fn find_pending(pool: &PgPool) -> Result<Vec<Self>> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE status = 'pending' ORDER BY created_at",
        )
        .fetch_all(pool)
        .await?;
        Ok(properties)
    }

    /// Create a new property submission (starts as pending).
    pub async fn create(
        host_id: UserId,
        title: String,
        description: String,
        property_type: String,
        location: String,
        price_per_night: f64,
        images: Vec<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                id, host_id, title, description, property_type, location,
                price_per_night, images, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending')
            RETURNING *
            "#,
        )
        .bind(PropertyId::new())
        .bind(host_id)
        .bind(title)
        .bind(description)
        .bind(property_type)
        .bind(location)
        .bind(price_per_night)
        .bind(images)
        .fetch_one(pool)
        .await?;
        Ok(property)
    }

    /// Persist the outcome of a review transition. The reason column is set
    /// on reject and cleared (NULL) on approve in the same statement.
    pub async fn set_status(
        id: PropertyId,
        status: ListingStatus,
        rejection_reason: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET
                status = $2,
                rejection_reason = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status.to_string())
        .bind(rejection_reason)
        .fetch_one(pool)
        .await?;
        Ok(property)
    }

    pub async fn delete(id: PropertyId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Explorer queries
    // =========================================================================

    /// Distinct property types (explorer depth 0).
    pub async fn distinct_types(pool: &PgPool) -> Result<Vec<String>> {
        let types = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT property_type FROM properties ORDER BY property_type",
        )
        .fetch_all(pool)
        .await?;
        Ok(types)
    }

    /// Distinct locations for a property type (explorer depth 1).
    pub async fn distinct_locations(property_type: &str, pool: &PgPool) -> Result<Vec<String>> {
        let locations = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT location FROM properties
            WHERE property_type = $1
            ORDER BY location
            "#,
        )
        .bind(property_type)
        .fetch_all(pool)
        .await?;
        Ok(locations)
    }

    /// Leaf rows for (type, location) (explorer depth 2).
    pub async fn find_by_type_and_location(
        property_type: &str,
        location: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT * FROM properties
            WHERE property_type = $1 AND location = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(property_type)
        .bind(location)
        .fetch_all(pool)
        .await?;
        Ok(properties)
    }

    /// Titles for a batch of ids, one round-trip (booking display names).
    pub async fn titles_by_ids(
        ids: &[PropertyId],
        pool: &PgPool,
    ) -> Result<Vec<(PropertyId, String)>> {
        let rows = sqlx::query_as::<_, (PropertyId, String)>(
            "SELECT id, title FROM properties WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
