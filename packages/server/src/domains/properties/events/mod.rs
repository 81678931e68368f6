//! Property domain events - FACT EVENTS ONLY
//!
//! Immutable facts about moderation outcomes. The notifications domain
//! watches these and fans out to the owner.

use crate::common::{PropertyId, UserId};

#[derive(Debug, Clone)]
pub enum PropertyEvent {
    /// Admin approved the property (from pending or rejected).
    PropertyApproved {
        property_id: PropertyId,
        host_id: UserId,
        title: String,
    },

    /// Admin rejected the pending property.
    PropertyRejected {
        property_id: PropertyId,
        host_id: UserId,
        title: String,
        reason: String,
    },

    /// Admin removed the property entirely.
    PropertyDeleted {
        property_id: PropertyId,
        host_id: UserId,
        title: String,
        reason: Option<String>,
    },
}
