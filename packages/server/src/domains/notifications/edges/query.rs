use juniper::{FieldError, FieldResult};

use crate::domains::notifications::actions;
use crate::domains::notifications::data::NotificationData;
use crate::server::graphql::context::GraphQLContext;

/// The calling user's notifications, newest first
pub async fn query_my_notifications(ctx: &GraphQLContext) -> FieldResult<Vec<NotificationData>> {
    let user = ctx.require_user()?;

    let notifications = actions::get_notifications(user.user_id, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to fetch notifications: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(notifications
        .into_iter()
        .map(NotificationData::from)
        .collect())
}

/// Unread badge count for the calling user
pub async fn query_unread_notification_count(ctx: &GraphQLContext) -> FieldResult<i32> {
    let user = ctx.require_user()?;

    let count = actions::get_unread_count(user.user_id, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to count notifications: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(count as i32)
}
