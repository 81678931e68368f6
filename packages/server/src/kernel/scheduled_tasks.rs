//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! One recurring job: every 60 seconds, republish per-user unread
//! notification counts to the stream hub. Clients consume the counts over
//! SSE instead of polling the API themselves.

use std::time::Duration;

use anyhow::Result;
use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::domains::notifications::models::Notification;
use crate::kernel::stream_hub::StreamHub;

/// Start all scheduled tasks
pub async fn start_scheduler(pool: PgPool, hub: StreamHub) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let tick_pool = pool.clone();
    let tick_hub = hub.clone();
    let unread_job = Job::new_repeated_async(Duration::from_secs(60), move |_uuid, _lock| {
        let pool = tick_pool.clone();
        let hub = tick_hub.clone();
        Box::pin(async move {
            if let Err(e) = publish_unread_counts(&pool, &hub).await {
                tracing::error!("Unread-count tick failed: {}", e);
            }
        })
    })?;

    scheduler.add(unread_job).await?;
    scheduler.start().await?;

    tracing::info!("Scheduled tasks started (unread notification counts every 60s)");
    Ok(scheduler)
}

/// Query unread counts for every user that has unread notifications and
/// push each to that user's stream topic.
async fn publish_unread_counts(pool: &PgPool, hub: &StreamHub) -> Result<()> {
    let counts = Notification::unread_counts(pool).await?;

    for (user_id, count) in counts {
        let topic = format!("notifications:{}:unread", user_id);
        hub.publish(
            &topic,
            serde_json::json!({ "type": "unread_count", "count": count }),
        )
        .await;
    }

    Ok(())
}
