use uuid::Uuid;

use crate::{
    AppState,
    db::{
        entities::{notification, notification::NotificationKind, user},
        repositories::{NotificationRepository, UserRepository},
    },
    error::{AppError, Result},
};

pub struct Inbox {
    pub notifications: Vec<notification::Model>,
    pub unread_count: u64,
}

pub async fn inbox(state: &AppState, recipient_id: Uuid) -> Result<Inbox> {
    let db_connection = state.db.get_connection();

    let notifications = NotificationRepository::list_for_recipient(db_connection, recipient_id).await?;
    let unread_count = NotificationRepository::unread_count(db_connection, recipient_id).await?;

    Ok(Inbox {
        notifications,
        unread_count,
    })
}

pub async fn mark_read(
    state: &AppState,
    recipient_id: Uuid,
    notification_id: Uuid,
) -> Result<notification::Model> {
    let db_connection = state.db.get_connection();

    let notification = NotificationRepository::find_notification_by_id(db_connection, notification_id)
        .await?
        .ok_or(AppError::NotificationNotFound)?;

    if notification.recipient_id != recipient_id {
        return Err(AppError::Forbidden);
    }

    NotificationRepository::mark_read(db_connection, notification).await
}

pub async fn delete(state: &AppState, recipient_id: Uuid, notification_id: Uuid) -> Result<()> {
    let db_connection = state.db.get_connection();

    let notification = NotificationRepository::find_notification_by_id(db_connection, notification_id)
        .await?
        .ok_or(AppError::NotificationNotFound)?;

    if notification.recipient_id != recipient_id {
        return Err(AppError::Forbidden);
    }

    NotificationRepository::delete_notification(db_connection, notification.id).await
}

/// Staff broadcast. Unknown recipient ids are skipped rather than failing the
/// whole batch; the returned count is what was actually created.
pub async fn send_bulk(
    state: &AppState,
    actor: &user::Model,
    recipient_ids: &[Uuid],
    title: &str,
    message: &str,
    kind: NotificationKind,
) -> Result<u64> {
    if !actor.role.is_staff() {
        return Err(AppError::Forbidden);
    }

    if title.trim().is_empty() || message.trim().is_empty() {
        return Err(AppError::InvalidParams(
            "Title and message are required".into(),
        ));
    }

    let db_transaction = state.db.begin_transaction().await?;

    let mut created = 0u64;
    for recipient_id in recipient_ids {
        if !UserRepository::exists(&db_transaction, *recipient_id).await? {
            tracing::debug!(recipient_id = %recipient_id, "Skipping unknown notification recipient");
            continue;
        }

        NotificationRepository::create_notification(
            &db_transaction,
            *recipient_id,
            title,
            message,
            kind,
            None,
        )
        .await?;

        created += 1;
    }

    db_transaction
        .commit()
        .await
        .map_err(AppError::DatabaseError)?;

    Ok(created)
}
