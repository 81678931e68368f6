//! Property domain actions - business logic functions
//!
//! Actions run the pure review machine against the stored status, persist
//! the outcome, and return events. GraphQL mutations dispatch the returned
//! event through the engine; side effects (notifications, email) happen
//! there and can never undo the mutation performed here.

use anyhow::Result;
use tracing::info;

use crate::common::{ListingStatus, PropertyId, UserId};
use crate::domains::moderation::{self, ReviewDecision};
use crate::domains::properties::events::PropertyEvent;
use crate::domains::properties::models::Property;
use crate::kernel::ServerDeps;

/// Get all properties awaiting review
/// Note: Admin auth is checked at the GraphQL layer
pub async fn get_pending_properties(deps: &ServerDeps) -> Result<Vec<Property>> {
    info!("Getting pending properties");

    Property::find_pending(&deps.db_pool).await
}

/// Host submits a new property; it enters the review queue as pending.
pub async fn submit_property(
    host_id: UserId,
    title: String,
    description: String,
    property_type: String,
    location: String,
    price_per_night: f64,
    images: Vec<String>,
    deps: &ServerDeps,
) -> Result<Property> {
    info!(host_id = %host_id, title = %title, "Submitting property");

    Property::create(
        host_id,
        title,
        description,
        property_type,
        location,
        price_per_night,
        images,
        &deps.db_pool,
    )
    .await
}

/// Approve a property listing.
/// Returns PropertyApproved event.
pub async fn approve_property(
    property_id: PropertyId,
    deps: &ServerDeps,
) -> Result<PropertyEvent> {
    info!(property_id = %property_id, "Approving property");

    let property = Property::find_by_id(property_id, &deps.db_pool).await?;
    let outcome = moderation::review(property.listing_status()?, ReviewDecision::Approve)?;

    Property::set_status(
        property_id,
        outcome.status,
        outcome.rejection_reason,
        &deps.db_pool,
    )
    .await?;

    Ok(PropertyEvent::PropertyApproved {
        property_id,
        host_id: property.host_id,
        title: property.title,
    })
}

/// Reject a pending property with a reason.
/// Returns PropertyRejected event.
pub async fn reject_property(
    property_id: PropertyId,
    reason: String,
    deps: &ServerDeps,
) -> Result<PropertyEvent> {
    info!(property_id = %property_id, reason = %reason, "Rejecting property");

    let property = Property::find_by_id(property_id, &deps.db_pool).await?;
    let outcome = moderation::review(
        property.listing_status()?,
        ReviewDecision::Reject {
            reason: reason.clone(),
        },
    )?;

    Property::set_status(
        property_id,
        outcome.status,
        outcome.rejection_reason,
        &deps.db_pool,
    )
    .await?;

    Ok(PropertyEvent::PropertyRejected {
        property_id,
        host_id: property.host_id,
        title: property.title,
        reason,
    })
}

/// Delete a property. Valid from any status; the owner is always notified,
/// with the optional human-supplied reason passed through.
/// Returns PropertyDeleted event.
pub async fn delete_property(
    property_id: PropertyId,
    reason: Option<String>,
    deps: &ServerDeps,
) -> Result<PropertyEvent> {
    info!(property_id = %property_id, "Deleting property");

    let property = Property::find_by_id(property_id, &deps.db_pool).await?;
    Property::delete(property_id, &deps.db_pool).await?;

    Ok(PropertyEvent::PropertyDeleted {
        property_id,
        host_id: property.host_id,
        title: property.title,
        reason,
    })
}

/// List properties, optionally filtered by status.
pub async fn get_properties(
    status: Option<ListingStatus>,
    deps: &ServerDeps,
) -> Result<Vec<Property>> {
    match status {
        Some(status) => Property::find_by_status(status, &deps.db_pool).await,
        None => Property::find_by_status(ListingStatus::Approved, &deps.db_pool).await,
    }
}
