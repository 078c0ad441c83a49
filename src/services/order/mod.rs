use uuid::Uuid;

use crate::{
    AppState,
    db::{
        entities::{
            artwork,
            notification::NotificationKind,
            order,
            order::OrderStatus,
            order_line, payment,
            payment::{PaymentMethod, PaymentStatus},
            user,
        },
        repositories::{
            ArtworkRepository, CartRepository, NotificationRepository, OrderRepository,
            UserRepository, generate_payment_reference, order::LineSnapshot,
        },
    },
    error::{AppError, Result},
};

#[derive(Debug, Clone)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_holder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub accept_terms: bool,
}

/// Form-level checks only; there is no card-network validation behind this.
pub fn validate_payment_details(form: &PaymentForm) -> Result<()> {
    if !form.accept_terms {
        return Err(AppError::InvalidPaymentDetails(
            "You must accept the terms of sale.".into(),
        ));
    }

    if form.card_holder.trim().is_empty() {
        return Err(AppError::InvalidPaymentDetails(
            "Card holder name is required.".into(),
        ));
    }

    let digits: String = form
        .card_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidPaymentDetails(
            "Card number must contain only digits.".into(),
        ));
    }
    if !(12..=19).contains(&digits.len()) {
        return Err(AppError::InvalidPaymentDetails(
            "Card number length is invalid.".into(),
        ));
    }

    if !is_valid_expiry(&form.expiry) {
        return Err(AppError::InvalidPaymentDetails(
            "Expiry must be in MM/YY format.".into(),
        ));
    }

    let cvv_ok = (3..=4).contains(&form.cvv.len()) && form.cvv.chars().all(|c| c.is_ascii_digit());
    if !cvv_ok {
        return Err(AppError::InvalidPaymentDetails("CVV is invalid.".into()));
    }

    Ok(())
}

fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };

    if month.len() != 2 || year.len() != 2 {
        return false;
    }
    if !month.chars().all(|c| c.is_ascii_digit()) || !year.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    matches!(month.parse::<u8>(), Ok(m) if (1..=12).contains(&m))
}

/// Converts the caller's cart into an order inside one transaction: stock is
/// conditionally decremented per line, line prices are snapshotted, and the
/// cart is emptied. Any stock shortfall rolls the whole thing back.
pub async fn checkout(
    state: &AppState,
    user_id: Uuid,
    shipping_address: &str,
) -> Result<order::Model> {
    let db_transaction = state.db.begin_transaction().await?;

    let cart = CartRepository::get_or_create_cart(&db_transaction, user_id).await?;
    let rows = CartRepository::items_with_artworks(&db_transaction, cart.id).await?;

    if rows.is_empty() {
        db_transaction.rollback().await?;
        return Err(AppError::EmptyCart);
    }

    let mut lines = Vec::with_capacity(rows.len());
    for (item, artwork) in rows {
        let Some(artwork) = artwork else {
            db_transaction.rollback().await?;
            return Err(AppError::ArtworkNotFound);
        };

        if !ArtworkRepository::try_decrement_stock(&db_transaction, artwork.id, item.quantity)
            .await?
        {
            db_transaction.rollback().await?;
            return Err(AppError::InsufficientStock(artwork.title));
        }

        lines.push(LineSnapshot {
            artwork_id: artwork.id,
            quantity: item.quantity,
            unit_price_cents: artwork.price_cents,
        });
    }

    let order =
        OrderRepository::create_order_with_lines(&db_transaction, user_id, shipping_address, lines)
            .await?;

    CartRepository::clear_items(&db_transaction, cart.id).await?;

    db_transaction
        .commit()
        .await
        .map_err(AppError::DatabaseError)?;

    tracing::info!(order_id = %order.id, user_id = %user_id, "Order created");

    Ok(order)
}

pub async fn pay(
    state: &AppState,
    user_id: Uuid,
    order_id: Uuid,
    form: &PaymentForm,
) -> Result<(order::Model, payment::Model)> {
    validate_payment_details(form)?;

    let db_transaction = state.db.begin_transaction().await?;

    let order = OrderRepository::find_order_by_id(&db_transaction, order_id)
        .await?
        .ok_or(AppError::OrderNotFound)?;

    if order.user_id != user_id {
        db_transaction.rollback().await?;
        return Err(AppError::Forbidden);
    }

    if !order.status.is_valid_transition(&OrderStatus::Paid) {
        db_transaction.rollback().await?;
        return Err(AppError::NotPayable);
    }

    let reference = generate_payment_reference();
    let payment = OrderRepository::upsert_payment(
        &db_transaction,
        order.id,
        form.method,
        PaymentStatus::Success,
        order.total_cents,
        &reference,
    )
    .await?;

    let order =
        OrderRepository::update_order_status(&db_transaction, order, OrderStatus::Paid, |_active| {
        })
        .await?;

    NotificationRepository::create_notification(
        &db_transaction,
        user_id,
        "Payment received",
        &format!("Your order has been paid (reference {}).", reference),
        NotificationKind::Order,
        None,
    )
    .await?;

    db_transaction
        .commit()
        .await
        .map_err(AppError::DatabaseError)?;

    tracing::info!(order_id = %order.id, reference = %reference, "Order paid");

    Ok((order, payment))
}

/// Cancellation does not restore artwork stock; restocking is a manual
/// back-office step today.
pub async fn cancel(state: &AppState, user_id: Uuid, order_id: Uuid) -> Result<order::Model> {
    let db_transaction = state.db.begin_transaction().await?;

    let order = OrderRepository::find_order_by_id(&db_transaction, order_id)
        .await?
        .ok_or(AppError::OrderNotFound)?;

    if order.user_id != user_id {
        db_transaction.rollback().await?;
        return Err(AppError::Forbidden);
    }

    if !order.status.is_valid_transition(&OrderStatus::Cancelled) {
        db_transaction.rollback().await?;
        return Err(AppError::NotCancellable);
    }

    let order = OrderRepository::update_order_status(
        &db_transaction,
        order,
        OrderStatus::Cancelled,
        |_active| {},
    )
    .await?;

    db_transaction
        .commit()
        .await
        .map_err(AppError::DatabaseError)?;

    Ok(order)
}

/// Staff-side confirmation of a paid order, recording who handled it.
pub async fn validate_order(
    state: &AppState,
    staff: &user::Model,
    order_id: Uuid,
) -> Result<order::Model> {
    if !staff.role.is_staff() {
        return Err(AppError::Forbidden);
    }

    let db_transaction = state.db.begin_transaction().await?;

    let order = OrderRepository::find_order_by_id(&db_transaction, order_id)
        .await?
        .ok_or(AppError::OrderNotFound)?;

    if !order.status.is_valid_transition(&OrderStatus::Validated) {
        db_transaction.rollback().await?;
        return Err(AppError::NotValidatable);
    }

    let staff_id = staff.id;
    let order = OrderRepository::update_order_status(
        &db_transaction,
        order,
        OrderStatus::Validated,
        |active| {
            active.handled_by = sea_orm::ActiveValue::Set(Some(staff_id));
        },
    )
    .await?;

    db_transaction
        .commit()
        .await
        .map_err(AppError::DatabaseError)?;

    Ok(order)
}

pub struct SalesReport {
    pub lines: Vec<(order_line::Model, Option<artwork::Model>)>,
    pub total_cents: i64,
}

fn report_total(lines: &[(order_line::Model, Option<artwork::Model>)]) -> i64 {
    lines.iter().map(|(line, _)| line.subtotal_cents()).sum()
}

/// What the caller's artworks have sold, every order line at its snapshot
/// price, newest order first.
pub async fn artist_sales(state: &AppState, actor: &user::Model) -> Result<SalesReport> {
    let db_connection = state.db.get_connection();

    let artist = UserRepository::find_artist_profile(db_connection, actor.id)
        .await?
        .ok_or(AppError::Forbidden)?;

    let lines = OrderRepository::sales_query(artist.id)
        .all(db_connection)
        .await
        .map_err(AppError::DatabaseError)?;

    let total_cents = report_total(&lines);

    Ok(SalesReport { lines, total_cents })
}

pub async fn list_orders(state: &AppState, user_id: Uuid) -> Result<Vec<order::Model>> {
    OrderRepository::list_orders_by_user(state.db.get_connection(), user_id).await
}

pub async fn order_detail(
    state: &AppState,
    user_id: Uuid,
    order_id: Uuid,
) -> Result<(order::Model, Vec<order_line::Model>)> {
    let db_connection = state.db.get_connection();

    let order = OrderRepository::find_order_by_id(db_connection, order_id)
        .await?
        .ok_or(AppError::OrderNotFound)?;

    if order.user_id != user_id {
        return Err(AppError::Forbidden);
    }

    let lines = OrderRepository::lines_for_order(db_connection, order_id).await?;

    Ok((order, lines))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{PaymentForm, report_total, validate_payment_details};
    use crate::{
        db::entities::{order_line, payment::PaymentMethod},
        error::AppError,
    };

    fn valid_form() -> PaymentForm {
        PaymentForm {
            method: PaymentMethod::Card,
            card_holder: "Ada Lovelace".into(),
            card_number: "4242 4242 4242 4242".into(),
            expiry: "09/27".into(),
            cvv: "123".into(),
            accept_terms: true,
        }
    }

    fn line(quantity: i32, unit_price_cents: i64) -> order_line::Model {
        order_line::Model {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            artwork_id: Uuid::new_v4(),
            quantity,
            unit_price_cents,
        }
    }

    #[test]
    fn sales_total_sums_lines_at_snapshot_prices() {
        let lines = vec![(line(2, 1000), None), (line(1, 500), None)];

        assert_eq!(report_total(&lines), 2500);
        assert_eq!(report_total(&[]), 0);
    }

    #[test]
    fn accepts_a_complete_form() {
        assert!(validate_payment_details(&valid_form()).is_ok());
    }

    #[test]
    fn rejects_missing_acceptance() {
        let form = PaymentForm {
            accept_terms: false,
            ..valid_form()
        };
        assert!(matches!(
            validate_payment_details(&form),
            Err(AppError::InvalidPaymentDetails(_))
        ));
    }

    #[test]
    fn rejects_empty_holder_and_bad_numbers() {
        let form = PaymentForm {
            card_holder: "  ".into(),
            ..valid_form()
        };
        assert!(validate_payment_details(&form).is_err());

        let form = PaymentForm {
            card_number: "4242-4242".into(),
            ..valid_form()
        };
        assert!(validate_payment_details(&form).is_err());

        let form = PaymentForm {
            card_number: "1234".into(),
            ..valid_form()
        };
        assert!(validate_payment_details(&form).is_err());
    }

    #[test]
    fn rejects_malformed_expiry() {
        for expiry in ["", "9/27", "13/27", "09-27", "0927", "ab/cd"] {
            let form = PaymentForm {
                expiry: expiry.into(),
                ..valid_form()
            };
            assert!(
                validate_payment_details(&form).is_err(),
                "expiry {:?} should be rejected",
                expiry
            );
        }
    }

    #[test]
    fn rejects_bad_cvv() {
        for cvv in ["", "12", "12345", "12a"] {
            let form = PaymentForm {
                cvv: cvv.into(),
                ..valid_form()
            };
            assert!(validate_payment_details(&form).is_err());
        }
    }
}
