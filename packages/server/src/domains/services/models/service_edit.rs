use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::{EditId, ServiceId};
use crate::domains::services::models::service::ServicePatch;

/// ServiceEdit - a proposed patch against a live service, awaiting admin
/// review. Approval applies the patch and deletes the row; only rejections
/// persist (status 'rejected'). Nothing prevents several pending edits for
/// the same service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceEdit {
    pub id: EditId,
    pub service_id: ServiceId,
    pub proposed: Json<ServicePatch>,
    pub status: String, // 'pending', 'rejected'
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl ServiceEdit {
    pub async fn find_by_id(id: EditId, pool: &PgPool) -> Result<Self> {
        let edit = sqlx::query_as::<_, ServiceEdit>("SELECT * FROM service_edits WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(edit)
    }

    /// Pending edits, optionally narrowed to one service, oldest first.
    pub async fn find_pending(
        service_id: Option<ServiceId>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let edits = match service_id {
            Some(service_id) => {
                sqlx::query_as::<_, ServiceEdit>(
                    r#"
                    SELECT * FROM service_edits
                    WHERE status = 'pending' AND service_id = $1
                    ORDER BY created_at
                    "#,
                )
                .bind(service_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ServiceEdit>(
                    "SELECT * FROM service_edits WHERE status = 'pending' ORDER BY created_at",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(edits)
    }

    /// Store a proposed patch (starts as pending). The live service row is
    /// not touched here.
    pub async fn create(
        service_id: ServiceId,
        proposed: ServicePatch,
        pool: &PgPool,
    ) -> Result<Self> {
        let edit = sqlx::query_as::<_, ServiceEdit>(
            r#"
            INSERT INTO service_edits (id, service_id, proposed, status)
            VALUES ($1, $2, $3, 'pending')
            RETURNING *
            "#,
        )
        .bind(EditId::new())
        .bind(service_id)
        .bind(Json(proposed))
        .fetch_one(pool)
        .await?;
        Ok(edit)
    }

    /// Mark an edit rejected, keeping it for the owner to see.
    pub async fn mark_rejected(
        id: EditId,
        reason: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let edit = sqlx::query_as::<_, ServiceEdit>(
            r#"
            UPDATE service_edits
            SET
                status = 'rejected',
                reason = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(reason)
        .fetch_one(pool)
        .await?;
        Ok(edit)
    }

    /// Remove the edit record (the final step of approval).
    pub async fn delete(id: EditId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM service_edits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
