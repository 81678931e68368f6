//! GraphQL types for the notifications domain.

use juniper::GraphQLObject;

use crate::domains::notifications::models::Notification;

#[derive(Debug, Clone, GraphQLObject)]
pub struct NotificationData {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: String,
}

impl From<Notification> for NotificationData {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            link: notification.link,
            read: notification.read,
            created_at: notification.created_at.to_rfc3339(),
        }
    }
}
