//! Service domain events - FACT EVENTS ONLY
//!
//! Immutable facts about moderation outcomes and the edit-request workflow.
//! The notifications domain watches these and fans out to the owner.

use crate::common::{EditId, ServiceId, UserId};

#[derive(Debug, Clone)]
pub enum ServiceEvent {
    /// Admin approved the service (from pending or rejected).
    ServiceApproved {
        service_id: ServiceId,
        provider_id: UserId,
        title: String,
    },

    /// Admin rejected the pending service.
    ServiceRejected {
        service_id: ServiceId,
        provider_id: UserId,
        title: String,
        reason: String,
    },

    /// Admin removed the service entirely.
    ServiceDeleted {
        service_id: ServiceId,
        provider_id: UserId,
        title: String,
        reason: Option<String>,
    },

    /// Admin approved a proposed edit; the patch is applied and the edit
    /// record is gone.
    EditApproved {
        edit_id: EditId,
        service_id: ServiceId,
        provider_id: UserId,
        title: String,
    },

    /// Admin rejected a proposed edit; the live service is untouched.
    EditRejected {
        edit_id: EditId,
        service_id: ServiceId,
        provider_id: UserId,
        title: String,
        reason: Option<String>,
    },
}
