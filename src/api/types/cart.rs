use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::cart::CartView;

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub artwork_id: Uuid,
    pub title: String,
    pub image_ref: String,
    pub unit_price_cents: i64,
    pub quantity: i32,
    pub line_total_cents: i64,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        let items = view
            .entries
            .into_iter()
            .map(|entry| CartItemResponse {
                artwork_id: entry.artwork.id,
                title: entry.artwork.title,
                image_ref: entry.artwork.image_ref,
                unit_price_cents: entry.artwork.price_cents,
                quantity: entry.quantity,
                line_total_cents: entry.quantity as i64 * entry.artwork.price_cents,
            })
            .collect();

        Self {
            items,
            subtotal_cents: view.totals.subtotal_cents,
            shipping_cents: view.totals.shipping_cents,
            tax_cents: view.totals.tax_cents,
            total_cents: view.totals.total_cents,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}
