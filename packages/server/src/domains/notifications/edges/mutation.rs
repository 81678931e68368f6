use juniper::{FieldError, FieldResult};

use crate::common::NotificationId;
use crate::domains::notifications::actions;
use crate::server::graphql::context::GraphQLContext;

/// Mark one of the calling user's notifications read
pub async fn mark_notification_read(
    ctx: &GraphQLContext,
    notification_id: String,
) -> FieldResult<bool> {
    let user = ctx.require_user()?;

    let id = NotificationId::parse(&notification_id)
        .map_err(|_| FieldError::new("Invalid notification ID", juniper::Value::null()))?;

    let marked = actions::mark_read(id, user.user_id, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to mark notification read: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(marked)
}
