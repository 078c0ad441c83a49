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
        CheckoutRequest, OrderDetailResponse, OrderLineResponse, OrderResponse, PaidOrderResponse,
        PayOrderRequest, PaymentResponse, SalesReportResponse,
    },
    error::{AppError, Result},
    services::order,
};

pub async fn checkout(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<OrderResponse>> {
    let user = current_user(&state, &bearer).await?;

    if request.shipping_address.trim().is_empty() {
        return Err(AppError::InvalidParams("Shipping address is required".into()));
    }

    let order = order::checkout(&state, user.id, request.shipping_address.trim()).await?;

    Ok(Json(OrderResponse::from(order)))
}

pub async fn list_orders(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Vec<OrderResponse>>> {
    let user = current_user(&state, &bearer).await?;

    let orders = order::list_orders(&state, user.id).await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

pub async fn order_detail(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<OrderDetailResponse>> {
    let user = current_user(&state, &bearer).await?;

    let (order, lines) = order::order_detail(&state, user.id, order_id).await?;

    Ok(Json(OrderDetailResponse {
        order: OrderResponse::from(order),
        lines: lines.into_iter().map(OrderLineResponse::from).collect(),
    }))
}

pub async fn pay_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<PayOrderRequest>,
) -> Result<Json<PaidOrderResponse>> {
    let user = current_user(&state, &bearer).await?;

    let (order, payment) = order::pay(&state, user.id, order_id, &request.into()).await?;

    Ok(Json(PaidOrderResponse {
        order: OrderResponse::from(order),
        payment: PaymentResponse::from(payment),
    }))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<OrderResponse>> {
    let user = current_user(&state, &bearer).await?;

    let order = order::cancel(&state, user.id, order_id).await?;

    Ok(Json(OrderResponse::from(order)))
}

pub async fn artist_sales(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<SalesReportResponse>> {
    let actor = current_user(&state, &bearer).await?;

    let report = order::artist_sales(&state, &actor).await?;

    Ok(Json(SalesReportResponse::from(report)))
}

pub async fn validate_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<OrderResponse>> {
    let staff = current_user(&state, &bearer).await?;

    let order = order::validate_order(&state, &staff, order_id).await?;

    Ok(Json(OrderResponse::from(order)))
}
