use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::entities::{
        notification,
        notification::{NotificationKind, NotificationStatus},
    },
    services::notification::Inbox,
};

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub status: NotificationStatus,
    pub exhibition_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

impl From<notification::Model> for NotificationResponse {
    fn from(notification: notification::Model) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            message: notification.message,
            kind: notification.kind,
            status: notification.status,
            exhibition_id: notification.exhibition_id,
            created_at: notification.created_at,
            read_at: notification.read_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InboxResponse {
    pub notifications: Vec<NotificationResponse>,
    pub unread_count: u64,
}

impl From<Inbox> for InboxResponse {
    fn from(inbox: Inbox) -> Self {
        Self {
            notifications: inbox
                .notifications
                .into_iter()
                .map(NotificationResponse::from)
                .collect(),
            unread_count: inbox.unread_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkNotificationRequest {
    pub recipient_ids: Vec<Uuid>,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
}

#[derive(Debug, Serialize)]
pub struct BulkNotificationResponse {
    pub created: u64,
}
