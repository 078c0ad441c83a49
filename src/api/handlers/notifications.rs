use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use uuid::Uuid;

use super::current_user;
use crate::{
    AppState,
    api::types::{
        BulkNotificationRequest, BulkNotificationResponse, InboxResponse, NotificationResponse,
        SuccessResponse,
    },
    error::Result,
    services::notification,
};

pub async fn inbox(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<InboxResponse>> {
    let user = current_user(&state, &bearer).await?;

    let inbox = notification::inbox(&state, user.id).await?;

    Ok(Json(InboxResponse::from(inbox)))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<NotificationResponse>> {
    let user = current_user(&state, &bearer).await?;

    let notification = notification::mark_read(&state, user.id, notification_id).await?;

    Ok(Json(NotificationResponse::from(notification)))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<SuccessResponse>> {
    let user = current_user(&state, &bearer).await?;

    notification::delete(&state, user.id, notification_id).await?;

    Ok(Json(SuccessResponse::ok()))
}

pub async fn send_bulk(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<BulkNotificationRequest>,
) -> Result<Json<BulkNotificationResponse>> {
    let actor = current_user(&state, &bearer).await?;

    let created = notification::send_bulk(
        &state,
        &actor,
        &request.recipient_ids,
        &request.title,
        &request.message,
        request.kind,
    )
    .await?;

    Ok(Json(BulkNotificationResponse { created }))
}
