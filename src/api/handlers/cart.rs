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
    api::types::{AddCartItemRequest, CartResponse, SuccessResponse},
    error::Result,
    services::cart,
};

pub async fn view_cart(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<CartResponse>> {
    let user = current_user(&state, &bearer).await?;

    let view = cart::view_cart(&state, user.id).await?;

    Ok(Json(CartResponse::from(view)))
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<AddCartItemRequest>,
) -> Result<Json<CartResponse>> {
    let user = current_user(&state, &bearer).await?;

    cart::add_item(&state, user.id, artwork_id, request.quantity).await?;
    let view = cart::view_cart(&state, user.id).await?;

    Ok(Json(CartResponse::from(view)))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<CartResponse>> {
    let user = current_user(&state, &bearer).await?;

    cart::remove_item(&state, user.id, artwork_id).await?;
    let view = cart::view_cart(&state, user.id).await?;

    Ok(Json(CartResponse::from(view)))
}

pub async fn clear_cart(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<SuccessResponse>> {
    let user = current_user(&state, &bearer).await?;

    cart::clear(&state, user.id).await?;

    Ok(Json(SuccessResponse::ok()))
}
