//! Production notification sink: writes rows through the model.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseNotificationSink;
use crate::domains::notifications::models::{NewNotification, Notification};

pub struct PgNotificationSink {
    pool: PgPool,
}

impl PgNotificationSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseNotificationSink for PgNotificationSink {
    async fn enqueue(&self, notification: NewNotification) -> Result<()> {
        Notification::create(notification, &self.pool).await?;
        Ok(())
    }
}
