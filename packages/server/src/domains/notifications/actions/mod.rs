//! Notification domain actions - business logic functions
//!
//! `notify` is the single fan-out entry point: persist, then email, then
//! stream. Each step is best-effort and failures are swallowed here - a
//! moderation mutation that already committed must never be failed by its
//! side effects.

use anyhow::Result;
use tracing::{error, warn};

use crate::common::{NotificationId, UserId};
use crate::domains::notifications::models::{NewNotification, Notification};
use crate::domains::users::models::User;
use crate::kernel::ServerDeps;

/// Fan a notification out: persisted row, best-effort email, stream push.
/// Infallible by contract; every failure is logged and dropped.
pub async fn notify(notification: NewNotification, deps: &ServerDeps) {
    let user_id = notification.user_id;

    if let Err(e) = deps.notifier.enqueue(notification.clone()).await {
        error!(user_id = %user_id, "Failed to persist notification: {}", e);
    }

    // Email rides on the user's stored address; a missing user just means
    // no email (the row, if persisted, still reaches them in-app).
    match User::find_by_id(user_id, &deps.db_pool).await {
        Ok(user) => {
            if let Err(e) = deps
                .email
                .send(
                    &user.email,
                    &notification.title,
                    &notification.message,
                    notification.link.as_deref(),
                )
                .await
            {
                warn!(user_id = %user_id, "Failed to send notification email: {}", e);
            }
        }
        Err(e) => {
            warn!(user_id = %user_id, "Skipping notification email, user lookup failed: {}", e);
        }
    }

    let topic = format!("notifications:{}", user_id);
    deps.stream_hub
        .publish(
            &topic,
            serde_json::json!({
                "type": "notification",
                "kind": notification.kind.to_string(),
                "title": notification.title,
                "message": notification.message,
                "link": notification.link,
            }),
        )
        .await;
}

/// The calling user's notifications, newest first.
pub async fn get_notifications(user_id: UserId, deps: &ServerDeps) -> Result<Vec<Notification>> {
    Notification::find_by_user(user_id, &deps.db_pool).await
}

/// Unread count for the badge.
pub async fn get_unread_count(user_id: UserId, deps: &ServerDeps) -> Result<i64> {
    Notification::unread_count(user_id, &deps.db_pool).await
}

/// Mark a single notification read.
pub async fn mark_read(
    notification_id: NotificationId,
    user_id: UserId,
    deps: &ServerDeps,
) -> Result<bool> {
    Notification::mark_read(notification_id, user_id, &deps.db_pool).await
}
