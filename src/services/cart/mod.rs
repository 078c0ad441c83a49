use uuid::Uuid;

use crate::{
    AppState,
    config::StoreConfig,
    db::{
        entities::{artwork, cart},
        repositories::{ArtworkRepository, CartRepository},
    },
    error::{AppError, Result},
};

pub struct CartView {
    pub cart: cart::Model,
    pub entries: Vec<CartEntry>,
    pub totals: CartTotals,
}

pub struct CartEntry {
    pub artwork: artwork::Model,
    pub quantity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// Subtotal plus a flat shipping fee (waived on an empty cart) plus tax on
/// the shipped subtotal. Integer cents throughout, tax truncated.
pub fn compute_totals(lines: &[(i32, i64)], store: &StoreConfig) -> CartTotals {
    let subtotal_cents: i64 = lines
        .iter()
        .map(|(quantity, unit_price_cents)| *quantity as i64 * unit_price_cents)
        .sum();

    let shipping_cents = if subtotal_cents > 0 {
        store.shipping_flat_cents
    } else {
        0
    };

    let tax_cents = (subtotal_cents + shipping_cents) * store.tax_rate_percent / 100;

    CartTotals {
        subtotal_cents,
        shipping_cents,
        tax_cents,
        total_cents: subtotal_cents + shipping_cents + tax_cents,
    }
}

pub async fn view_cart(state: &AppState, user_id: Uuid) -> Result<CartView> {
    let db_connection = state.db.get_connection();

    let cart = CartRepository::get_or_create_cart(db_connection, user_id).await?;
    let rows = CartRepository::items_with_artworks(db_connection, cart.id).await?;

    let entries: Vec<CartEntry> = rows
        .into_iter()
        .filter_map(|(item, artwork)| {
            artwork.map(|artwork| CartEntry {
                artwork,
                quantity: item.quantity,
            })
        })
        .collect();

    let lines: Vec<(i32, i64)> = entries
        .iter()
        .map(|entry| (entry.quantity, entry.artwork.price_cents))
        .collect();

    let totals = compute_totals(&lines, &state.config.store);

    Ok(CartView {
        cart,
        entries,
        totals,
    })
}

pub async fn add_item(
    state: &AppState,
    user_id: Uuid,
    artwork_id: Uuid,
    quantity: i32,
) -> Result<()> {
    if quantity < 1 {
        return Err(AppError::InvalidParams("Quantity must be at least 1".into()));
    }

    let db_transaction = state.db.begin_transaction().await?;

    let artwork = ArtworkRepository::find_artwork_by_id(&db_transaction, artwork_id)
        .await?
        .ok_or(AppError::ArtworkNotFound)?;

    if !artwork.is_purchasable() {
        db_transaction.rollback().await?;
        return Err(AppError::OutOfStock);
    }

    let cart = CartRepository::get_or_create_cart(&db_transaction, user_id).await?;

    // Stock is re-checked against the would-be line quantity; checkout does
    // the authoritative conditional decrement later.
    let existing = CartRepository::find_item(&db_transaction, cart.id, artwork_id)
        .await?
        .map(|item| item.quantity)
        .unwrap_or(0);

    if existing + quantity > artwork.stock {
        db_transaction.rollback().await?;
        return Err(AppError::OutOfStock);
    }

    CartRepository::add_quantity(&db_transaction, cart.id, artwork_id, quantity).await?;

    db_transaction
        .commit()
        .await
        .map_err(AppError::DatabaseError)?;

    Ok(())
}

pub async fn remove_item(state: &AppState, user_id: Uuid, artwork_id: Uuid) -> Result<()> {
    let db_connection = state.db.get_connection();

    let cart = CartRepository::get_or_create_cart(db_connection, user_id).await?;

    if !CartRepository::remove_item(db_connection, cart.id, artwork_id).await? {
        return Err(AppError::CartItemNotFound);
    }

    Ok(())
}

pub async fn clear(state: &AppState, user_id: Uuid) -> Result<()> {
    let db_connection = state.db.get_connection();

    let cart = CartRepository::get_or_create_cart(db_connection, user_id).await?;
    CartRepository::clear_items(db_connection, cart.id).await
}

#[cfg(test)]
mod tests {
    use super::compute_totals;
    use crate::config::StoreConfig;

    fn store() -> StoreConfig {
        StoreConfig {
            shipping_flat_cents: 500,
            tax_rate_percent: 20,
            default_page_size: 12,
            max_page_size: 100,
        }
    }

    #[test]
    fn worked_example_from_the_storefront() {
        // 2x 10.00 + 1x 5.00 -> 25.00 subtotal, 5.00 shipping, 6.00 tax.
        let totals = compute_totals(&[(2, 1000), (1, 500)], &store());

        assert_eq!(totals.subtotal_cents, 2500);
        assert_eq!(totals.shipping_cents, 500);
        assert_eq!(totals.tax_cents, 600);
        assert_eq!(totals.total_cents, 3600);
    }

    #[test]
    fn empty_cart_pays_no_shipping_or_tax() {
        let totals = compute_totals(&[], &store());

        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.shipping_cents, 0);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, 0);
    }

    #[test]
    fn tax_is_truncated_to_whole_cents() {
        let totals = compute_totals(&[(1, 3)], &store());

        // (3 + 500) * 20 / 100 = 100.6 -> 100
        assert_eq!(totals.tax_cents, 100);
        assert_eq!(totals.total_cents, 603);
    }
}
