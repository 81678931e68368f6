//! Service domain actions - business logic functions
//!
//! Moderation actions mirror the property ones: run the pure review machine,
//! persist, return an event. The edit-request workflow lives here too:
//! apply-then-delete on approval is two independent round-trips with no
//! transaction, so a crash in between leaves an already-applied edit
//! visibly pending (accepted; an admin retries by hand).

use anyhow::Result;
use tracing::info;

use crate::common::{EditId, ListingStatus, ServiceId, UserId};
use crate::domains::moderation::{self, ReviewDecision};
use crate::domains::services::catalog::{self, ModelGroup};
use crate::domains::services::events::ServiceEvent;
use crate::domains::services::models::{
    Service, ServiceEdit, ServiceFeatures, ServiceModel, ServicePatch, ServiceType,
};
use crate::kernel::ServerDeps;

/// Get all services awaiting review
/// Note: Admin auth is checked at the GraphQL layer
pub async fn get_pending_services(deps: &ServerDeps) -> Result<Vec<Service>> {
    info!("Getting pending services");

    Service::find_pending(&deps.db_pool).await
}

/// Provider submits a new service; it enters the review queue as pending.
pub async fn submit_service(
    provider_id: UserId,
    service_type: ServiceType,
    title: String,
    description: String,
    price: f64,
    images: Vec<String>,
    features: ServiceFeatures,
    deps: &ServerDeps,
) -> Result<Service> {
    info!(provider_id = %provider_id, title = %title, "Submitting service");

    Service::create(
        provider_id,
        service_type,
        title,
        description,
        price,
        images,
        features,
        &deps.db_pool,
    )
    .await
}

/// Approve a service listing.
/// Returns ServiceApproved event.
pub async fn approve_service(service_id: ServiceId, deps: &ServerDeps) -> Result<ServiceEvent> {
    info!(service_id = %service_id, "Approving service");

    let service = Service::find_by_id(service_id, &deps.db_pool).await?;
    let outcome = moderation::review(service.listing_status()?, ReviewDecision::Approve)?;

    Service::set_status(
        service_id,
        outcome.status,
        outcome.rejection_reason,
        &deps.db_pool,
    )
    .await?;

    Ok(ServiceEvent::ServiceApproved {
        service_id,
        provider_id: service.provider_id,
        title: service.title,
    })
}

/// Reject a pending service with a reason.
/// Returns ServiceRejected event.
pub async fn reject_service(
    service_id: ServiceId,
    reason: String,
    deps: &ServerDeps,
) -> Result<ServiceEvent> {
    info!(service_id = %service_id, reason = %reason, "Rejecting service");

    let service = Service::find_by_id(service_id, &deps.db_pool).await?;
    let outcome = moderation::review(
        service.listing_status()?,
        ReviewDecision::Reject {
            reason: reason.clone(),
        },
    )?;

    Service::set_status(
        service_id,
        outcome.status,
        outcome.rejection_reason,
        &deps.db_pool,
    )
    .await?;

    Ok(ServiceEvent::ServiceRejected {
        service_id,
        provider_id: service.provider_id,
        title: service.title,
        reason,
    })
}

/// Delete a service. Valid from any status; the owner is always notified,
/// with the optional human-supplied reason passed through.
/// Returns ServiceDeleted event.
pub async fn delete_service(
    service_id: ServiceId,
    reason: Option<String>,
    deps: &ServerDeps,
) -> Result<ServiceEvent> {
    info!(service_id = %service_id, "Deleting service");

    let service = Service::find_by_id(service_id, &deps.db_pool).await?;
    Service::delete(service_id, &deps.db_pool).await?;

    Ok(ServiceEvent::ServiceDeleted {
        service_id,
        provider_id: service.provider_id,
        title: service.title,
        reason,
    })
}

// ============================================================================
// Edit request workflow
// ============================================================================

/// Owner proposes a patch against their live service. The live row is not
/// touched; the edit waits in the review queue.
pub async fn submit_edit(
    service_id: ServiceId,
    requested_by: UserId,
    proposed: ServicePatch,
    deps: &ServerDeps,
) -> Result<ServiceEdit> {
    info!(service_id = %service_id, requested_by = %requested_by, "Submitting service edit");

    if proposed.is_empty() {
        anyhow::bail!("Edit proposes no changes");
    }

    let service = Service::find_by_id(service_id, &deps.db_pool).await?;
    if service.provider_id != requested_by {
        anyhow::bail!("Only the owner can propose edits to a service");
    }

    ServiceEdit::create(service_id, proposed, &deps.db_pool).await
}

/// Apply a pending edit onto its service, then delete the edit record.
/// Returns EditApproved event.
pub async fn approve_edit(edit_id: EditId, deps: &ServerDeps) -> Result<ServiceEvent> {
    info!(edit_id = %edit_id, "Approving service edit");

    let edit = ServiceEdit::find_by_id(edit_id, &deps.db_pool).await?;
    let service = Service::apply_patch(edit.service_id, &edit.proposed.0, &deps.db_pool).await?;
    ServiceEdit::delete(edit_id, &deps.db_pool).await?;

    Ok(ServiceEvent::EditApproved {
        edit_id,
        service_id: service.id,
        provider_id: service.provider_id,
        title: service.title,
    })
}

/// Reject a pending edit with an optional reason; the live service stays as
/// it is. Returns EditRejected event.
pub async fn reject_edit(
    edit_id: EditId,
    reason: Option<String>,
    deps: &ServerDeps,
) -> Result<ServiceEvent> {
    info!(edit_id = %edit_id, "Rejecting service edit");

    let edit = ServiceEdit::mark_rejected(edit_id, reason.clone(), &deps.db_pool).await?;
    let service = Service::find_by_id(edit.service_id, &deps.db_pool).await?;

    Ok(ServiceEvent::EditRejected {
        edit_id,
        service_id: service.id,
        provider_id: service.provider_id,
        title: service.title,
        reason,
    })
}

/// Pending edits, optionally narrowed to one service.
pub async fn get_pending_edits(
    service_id: Option<ServiceId>,
    deps: &ServerDeps,
) -> Result<Vec<ServiceEdit>> {
    ServiceEdit::find_pending(service_id, &deps.db_pool).await
}

// ============================================================================
// Catalog
// ============================================================================

/// The browsable rental catalog for a service type: approved listings
/// grouped by (brand, model). Rows are fetched newest-first because the
/// aggregator's image/price semantics depend on that order.
pub async fn get_catalog(
    service_type: ServiceType,
    deps: &ServerDeps,
) -> Result<Vec<ModelGroup>> {
    let services = Service::find_approved_by_type(service_type, &deps.db_pool).await?;
    Ok(catalog::group_by_model(&services))
}

/// Editorial metadata for a (type, brand, model) triple, if any.
pub async fn get_service_model(
    service_type: ServiceType,
    brand: &str,
    model: &str,
    deps: &ServerDeps,
) -> Result<Option<ServiceModel>> {
    ServiceModel::find(service_type, brand, model, &deps.db_pool).await
}

/// Create or refresh editorial metadata for a triple.
pub async fn upsert_service_model(
    service_type: ServiceType,
    brand: String,
    model: String,
    description: String,
    hero_image: Option<String>,
    deps: &ServerDeps,
) -> Result<ServiceModel> {
    info!(service_type = %service_type, brand = %brand, model = %model, "Upserting service model");

    ServiceModel::upsert(
        service_type,
        brand,
        model,
        description,
        hero_image,
        &deps.db_pool,
    )
    .await
}

/// List services, optionally filtered by status (defaults to approved).
pub async fn get_services(
    status: Option<ListingStatus>,
    deps: &ServerDeps,
) -> Result<Vec<Service>> {
    match status {
        Some(status) => Service::find_by_status(status, &deps.db_pool).await,
        None => Service::find_by_status(ListingStatus::Approved, &deps.db_pool).await,
    }
}
