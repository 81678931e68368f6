use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::{ListingStatus, ServiceId, UserId};
use crate::domains::services::models::features::ServiceFeatures;

/// The catalog buckets a service can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Car,
    Bike,
    Tour,
}

impl ServiceType {
    /// Explorer depth-0 entries, in display order.
    pub const ALL: [ServiceType; 3] = [ServiceType::Car, ServiceType::Bike, ServiceType::Tour];
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Car => write!(f, "car"),
            ServiceType::Bike => write!(f, "bike"),
            ServiceType::Tour => write!(f, "tour"),
        }
    }
}

impl std::str::FromStr for ServiceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "car" => Ok(ServiceType::Car),
            "bike" => Ok(ServiceType::Bike),
            "tour" => Ok(ServiceType::Tour),
            _ => Err(anyhow::anyhow!("Invalid service type: {}", s)),
        }
    }
}

/// Service - a rental or activity listing owned by a provider (requires
/// approval before it is visible to guests).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    pub id: ServiceId,
    pub provider_id: UserId,
    pub service_type: String, // 'car', 'bike', 'tour'
    pub title: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub features: Json<ServiceFeatures>,

    // Moderation workflow
    pub status: String, // 'pending', 'approved', 'rejected'
    pub rejection_reason: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn listing_status(&self) -> Result<ListingStatus> {
        self.status.parse()
    }
}

/// Partial update proposed against a live service. Absent fields are left
/// untouched when the patch is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<ServiceFeatures>,
}

impl ServicePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.images.is_none()
            && self.features.is_none()
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Service {
    pub async fn find_by_id(id: ServiceId, pool: &PgPool) -> Result<Self> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(service)
    }

    /// Approved services of a type, newest first. This is the aggregator's
    /// input and its order is significant (see catalog.rs).
    pub async fn find_approved_by_type(
        service_type: ServiceType,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let services = sqlx::query_as::<_, Service>(
            r#"
            SELECT * FROM services
            WHERE service_type = $1 AND status = 'approved'
            ORDER BY created_at DESC
            "#,
        )
        .bind(service_type.to_string())
        .fetch_all(pool)
        .await?;
        Ok(services)
    }

    pub async fn find_by_status(status: ListingStatus, pool: &PgPool) -> Result<Vec<Self>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status.to_string())
        .fetch_all(pool)
        .await?;
        Ok(services)
    }

    /// Services awaiting review, oldest submissions first.
    pub async fn find_pending(pool: &PgPool) -> Result<Vec<Self>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE status = 'pending' ORDER BY created_at",
        )
        .fetch_all(pool)
        .await?;
        Ok(services)
    }

    /// Create a new service submission (starts as pending).
    pub async fn create(
        provider_id: UserId,
        service_type: ServiceType,
        title: String,
        description: String,
        price: f64,
        images: Vec<String>,
        features: ServiceFeatures,
        pool: &PgPool,
    ) -> Result<Self> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (
                id, provider_id, service_type, title, description, price,
                images, features, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending')
            RETURNING *
            "#,
        )
        .bind(ServiceId::new())
        .bind(provider_id)
        .bind(service_type.to_string())
        .bind(title)
        .bind(description)
        .bind(price)
        .bind(images)
        .bind(Json(features))
        .fetch_one(pool)
        .await?;
        Ok(service)
    }

    /// Persist the outcome of a review transition. The reason column is set
    /// on reject and cleared (NULL) on approve in the same statement.
    pub async fn set_status(
        id: ServiceId,
        status: ListingStatus,
        rejection_reason: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
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
        Ok(service)
    }

    /// Apply an approved edit patch. COALESCE keeps every column whose patch
    /// field is absent; only the fields present in the patch change.
    pub async fn apply_patch(id: ServiceId, patch: &ServicePatch, pool: &PgPool) -> Result<Self> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                images = COALESCE($5, images),
                features = COALESCE($6, features),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.title.clone())
        .bind(patch.description.clone())
        .bind(patch.price)
        .bind(patch.images.clone())
        .bind(patch.features.clone().map(Json))
        .fetch_one(pool)
        .await?;
        Ok(service)
    }

    pub async fn delete(id: ServiceId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Explorer queries
    // =========================================================================

    /// Distinct brands carried by services of a type (explorer depth 1).
    pub async fn distinct_brands(service_type: ServiceType, pool: &PgPool) -> Result<Vec<String>> {
        let brands = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT features->>'brand' AS brand FROM services
            WHERE service_type = $1 AND features->>'brand' IS NOT NULL
            ORDER BY brand
            "#,
        )
        .bind(service_type.to_string())
        .fetch_all(pool)
        .await?;
        Ok(brands)
    }

    /// Distinct models for (type, brand) (explorer depth 2).
    pub async fn distinct_models(
        service_type: ServiceType,
        brand: &str,
        pool: &PgPool,
    ) -> Result<Vec<String>> {
        let models = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT features->>'model' AS model FROM services
            WHERE service_type = $1
              AND features->>'brand' = $2
              AND features->>'model' IS NOT NULL
            ORDER BY model
            "#,
        )
        .bind(service_type.to_string())
        .bind(brand)
        .fetch_all(pool)
        .await?;
        Ok(models)
    }

    /// Leaf rows for (type, brand, model), matched by feature containment
    /// (explorer depth 3). All statuses — the admin sees unreviewed rows too.
    pub async fn find_by_model(
        service_type: ServiceType,
        brand: &str,
        model: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let filter = serde_json::json!({ "brand": brand, "model": model });
        let services = sqlx::query_as::<_, Service>(
            r#"
            SELECT * FROM services
            WHERE service_type = $1 AND features @> $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(service_type.to_string())
        .bind(Json(filter))
        .fetch_all(pool)
        .await?;
        Ok(services)
    }

    /// Titles for a batch of ids, one round-trip (booking display names).
    pub async fn titles_by_ids(
        ids: &[ServiceId],
        pool: &PgPool,
    ) -> Result<Vec<(ServiceId, String)>> {
        let rows = sqlx::query_as::<_, (ServiceId, String)>(
            "SELECT id, title FROM services WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_roundtrip() {
        for service_type in ServiceType::ALL {
            assert_eq!(
                service_type.to_string().parse::<ServiceType>().unwrap(),
                service_type
            );
        }
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(ServicePatch::default().is_empty());
        assert!(!ServicePatch {
            price: Some(45.0),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = ServicePatch {
            price: Some(45.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 45.0 }));
    }
}
