//! Server dependencies for effects (using traits for testability)
//!
//! Central dependency container handed to every effect and action that
//! needs infrastructure beyond the database pool.

use anyhow::Result;
use async_trait::async_trait;
use courier::CourierService;
use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{
    stream_hub::StreamHub, BaseEmailService, BaseNotificationSink, BaseStorageService,
};

// =============================================================================
// CourierService Adapter (implements BaseEmailService trait)
// =============================================================================

/// Wrapper around CourierService that implements BaseEmailService
pub struct CourierAdapter(pub Arc<CourierService>);

impl CourierAdapter {
    pub fn new(service: Arc<CourierService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseEmailService for CourierAdapter {
    async fn send(&self, to: &str, subject: &str, body: &str, link: Option<&str>) -> Result<()> {
        self.0
            .send_email(to, subject, body, link)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to effects (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Persisted notification writes (swappable in tests).
    pub notifier: Arc<dyn BaseNotificationSink>,
    /// Best-effort email delivery.
    pub email: Arc<dyn BaseEmailService>,
    /// Listing image uploads.
    pub storage: Arc<dyn BaseStorageService>,
    /// In-process pub/sub hub for real-time streaming to SSE endpoints
    pub stream_hub: StreamHub,
    /// Base URL for notification deep links.
    pub app_base_url: String,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        notifier: Arc<dyn BaseNotificationSink>,
        email: Arc<dyn BaseEmailService>,
        storage: Arc<dyn BaseStorageService>,
        stream_hub: StreamHub,
        app_base_url: String,
    ) -> Self {
        Self {
            db_pool,
            notifier,
            email,
            storage,
            stream_hub,
            app_base_url,
        }
    }
}
