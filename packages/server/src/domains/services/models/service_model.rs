use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ServiceModelId;
use crate::domains::services::models::service::ServiceType;

/// ServiceModel - editorial metadata for a (type, brand, model) triple,
/// independent of any individual listing. At most one row per triple.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceModel {
    pub id: ServiceModelId,
    pub service_type: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub hero_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl ServiceModel {
    /// Metadata for a triple, if an editor has written any.
    pub async fn find(
        service_type: ServiceType,
        brand: &str,
        model: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, ServiceModel>(
            r#"
            SELECT * FROM service_models
            WHERE service_type = $1 AND brand = $2 AND model = $3
            "#,
        )
        .bind(service_type.to_string())
        .bind(brand)
        .bind(model)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// All metadata rows under (type, brand) — one query decorates a whole
    /// explorer level.
    pub async fn find_by_brand(
        service_type: ServiceType,
        brand: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, ServiceModel>(
            r#"
            SELECT * FROM service_models
            WHERE service_type = $1 AND brand = $2
            ORDER BY model
            "#,
        )
        .bind(service_type.to_string())
        .bind(brand)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Create or refresh the metadata for a triple. The UNIQUE constraint on
    /// (service_type, brand, model) makes this an atomic upsert.
    pub async fn upsert(
        service_type: ServiceType,
        brand: String,
        model: String,
        description: String,
        hero_image: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let row = sqlx::query_as::<_, ServiceModel>(
            r#"
            INSERT INTO service_models (id, service_type, brand, model, description, hero_image)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (service_type, brand, model) DO UPDATE
            SET
                description = EXCLUDED.description,
                hero_image = EXCLUDED.hero_image,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(ServiceModelId::new())
        .bind(service_type.to_string())
        .bind(brand)
        .bind(model)
        .bind(description)
        .bind(hero_image)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }
}
