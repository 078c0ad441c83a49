use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    db::entities::{
        Notification, notification,
        notification::{NotificationKind, NotificationStatus},
    },
    error::{AppError, Result},
};

pub struct NotificationRepository;

impl NotificationRepository {
    pub async fn find_notification_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<notification::Model>> {
        Notification::find_by_id(id)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn list_for_recipient<C: ConnectionTrait>(
        db_connection: &C,
        recipient_id: Uuid,
    ) -> Result<Vec<notification::Model>> {
        Notification::find()
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .order_by_desc(notification::Column::CreatedAt)
            .all(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn unread_count<C: ConnectionTrait>(
        db_connection: &C,
        recipient_id: Uuid,
    ) -> Result<u64> {
        Notification::find()
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .filter(notification::Column::Status.eq(NotificationStatus::Unread))
            .count(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn create_notification<C: ConnectionTrait>(
        db_connection: &C,
        recipient_id: Uuid,
        title: &str,
        message: &str,
        kind: NotificationKind,
        exhibition_id: Option<Uuid>,
    ) -> Result<notification::Model> {
        let notification = notification::ActiveModel {
            id: Set(Uuid::new_v4()),
            recipient_id: Set(recipient_id),
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            kind: Set(kind),
            status: Set(NotificationStatus::Unread),
            exhibition_id: Set(exhibition_id),
            created_at: Set(Utc::now()),
            read_at: Set(None),
        };

        notification
            .insert(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn mark_read<C: ConnectionTrait>(
        db_connection: &C,
        notification: notification::Model,
    ) -> Result<notification::Model> {
        // Idempotent: a second read keeps the first read time.
        let Some(read_at) = notification.first_read_at(Utc::now()) else {
            return Ok(notification);
        };

        let mut active: notification::ActiveModel = notification.into();
        active.status = Set(NotificationStatus::Read);
        active.read_at = Set(Some(read_at));

        active
            .update(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn delete_notification<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<()> {
        Notification::delete_by_id(id)
            .exec(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(())
    }
}
