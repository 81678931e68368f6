// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Domain code
// depends on them through ServerDeps so tests can swap in fakes.
//
// Naming convention: Base* for trait names.

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::notifications::models::NewNotification;

// =============================================================================
// Email Trigger (Infrastructure - transactional email)
// =============================================================================

/// Out-of-band email delivery. Best-effort by contract: callers log failures
/// and move on, they never surface them to the user action that triggered
/// the send.
#[async_trait]
pub trait BaseEmailService: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str, link: Option<&str>) -> Result<()>;
}

// =============================================================================
// Notification Sink (Infrastructure - persisted notifications)
// =============================================================================

/// Persists a notification row for a user. The production impl writes
/// through the notifications model; tests inject recording or failing sinks.
#[async_trait]
pub trait BaseNotificationSink: Send + Sync {
    async fn enqueue(&self, notification: NewNotification) -> Result<()>;
}

// =============================================================================
// Object Storage (Infrastructure - listing images)
// =============================================================================

/// Upload a blob and get back its public URL. All image hosting is
/// delegated; this process never serves file bytes itself.
#[async_trait]
pub trait BaseStorageService: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, bucket: &str, path: &str) -> Result<String>;
}
