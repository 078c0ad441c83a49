use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::entities::{
        order, order::OrderStatus, order_line, payment,
        payment::{PaymentMethod, PaymentStatus},
    },
    services::order::{PaymentForm, SalesReport},
};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub shipping_address: String,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub shipping_address: String,
    pub handled_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<order::Model> for OrderResponse {
    fn from(order: order::Model) -> Self {
        Self {
            id: order.id,
            status: order.status,
            total_cents: order.total_cents,
            shipping_address: order.shipping_address,
            handled_by: order.handled_by,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderLineResponse {
    pub artwork_id: Uuid,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
}

impl From<order_line::Model> for OrderLineResponse {
    fn from(line: order_line::Model) -> Self {
        let subtotal_cents = line.subtotal_cents();
        Self {
            artwork_id: line.artwork_id,
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
            subtotal_cents,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub lines: Vec<OrderLineResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PayOrderRequest {
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(default)]
    pub card_holder: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub accept_terms: bool,
}

impl From<PayOrderRequest> for PaymentForm {
    fn from(request: PayOrderRequest) -> Self {
        Self {
            method: request.method,
            card_holder: request.card_holder,
            card_number: request.card_number,
            expiry: request.expiry,
            cvv: request.cvv,
            accept_terms: request.accept_terms,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub amount_cents: i64,
    pub reference: Option<String>,
    pub paid_at: DateTime<Utc>,
}

impl From<payment::Model> for PaymentResponse {
    fn from(payment: payment::Model) -> Self {
        Self {
            method: payment.method,
            status: payment.status,
            amount_cents: payment.amount_cents,
            reference: payment.reference,
            paid_at: payment.paid_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaidOrderResponse {
    pub order: OrderResponse,
    pub payment: PaymentResponse,
}

#[derive(Debug, Serialize)]
pub struct SaleLineResponse {
    pub order_id: Uuid,
    pub artwork_id: Uuid,
    pub artwork_title: Option<String>,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
}

#[derive(Debug, Serialize)]
pub struct SalesReportResponse {
    pub lines: Vec<SaleLineResponse>,
    pub total_cents: i64,
}

impl From<SalesReport> for SalesReportResponse {
    fn from(report: SalesReport) -> Self {
        let lines = report
            .lines
            .into_iter()
            .map(|(line, artwork)| SaleLineResponse {
                order_id: line.order_id,
                artwork_id: line.artwork_id,
                artwork_title: artwork.map(|artwork| artwork.title),
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
                subtotal_cents: line.subtotal_cents(),
            })
            .collect();

        Self {
            lines,
            total_cents: report.total_cents,
        }
    }
}
