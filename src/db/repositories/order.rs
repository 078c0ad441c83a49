use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, SelectTwo,
};
use uuid::Uuid;

use crate::{
    db::entities::{
        Artwork, Order, OrderLine, Payment, artwork, order,
        order::OrderStatus,
        order_line, payment,
        payment::{PaymentMethod, PaymentStatus},
    },
    error::{AppError, Result},
};

pub struct LineSnapshot {
    pub artwork_id: Uuid,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

pub struct OrderRepository;

impl OrderRepository {
    pub async fn find_order_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<order::Model>> {
        Order::find_by_id(id)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn list_orders_by_user<C: ConnectionTrait>(
        db_connection: &C,
        user_id: Uuid,
    ) -> Result<Vec<order::Model>> {
        Order::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::CreatedAt)
            .all(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Sales report feed: every line sold against the artist's artworks,
    /// newest order first.
    pub fn sales_query(artist_id: Uuid) -> SelectTwo<OrderLine, Artwork> {
        OrderLine::find()
            .find_also_related(Artwork)
            .filter(artwork::Column::ArtistId.eq(artist_id))
            .join(JoinType::InnerJoin, order_line::Relation::Order.def())
            .order_by_desc(order::Column::CreatedAt)
    }

    pub async fn lines_for_order<C: ConnectionTrait>(
        db_connection: &C,
        order_id: Uuid,
    ) -> Result<Vec<order_line::Model>> {
        OrderLine::find()
            .filter(order_line::Column::OrderId.eq(order_id))
            .all(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Inserts the order and its immutable line snapshots. The caller is
    /// responsible for running this inside the checkout transaction.
    pub async fn create_order_with_lines<C: ConnectionTrait>(
        db_connection: &C,
        user_id: Uuid,
        shipping_address: &str,
        lines: Vec<LineSnapshot>,
    ) -> Result<order::Model> {
        let total_cents: i64 = lines
            .iter()
            .map(|line| line.quantity as i64 * line.unit_price_cents)
            .sum();

        let order = order::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            handled_by: Set(None),
            total_cents: Set(total_cents),
            status: Set(OrderStatus::InProgress),
            shipping_address: Set(shipping_address.to_string()),
            created_at: Set(Utc::now()),
        };

        let created = order
            .insert(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        for line in lines {
            let order_line = order_line::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(created.id),
                artwork_id: Set(line.artwork_id),
                quantity: Set(line.quantity),
                unit_price_cents: Set(line.unit_price_cents),
            };

            order_line
                .insert(db_connection)
                .await
                .map_err(AppError::DatabaseError)?;
        }

        Ok(created)
    }

    pub async fn update_order_status<C: ConnectionTrait, F>(
        db_connection: &C,
        order: order::Model,
        status: OrderStatus,
        updater: F,
    ) -> Result<order::Model>
    where
        F: FnOnce(&mut order::ActiveModel),
    {
        let mut active: order::ActiveModel = order.into();
        active.status = Set(status);

        updater(&mut active);

        active
            .update(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn find_payment_by_order<C: ConnectionTrait>(
        db_connection: &C,
        order_id: Uuid,
    ) -> Result<Option<payment::Model>> {
        Payment::find()
            .filter(payment::Column::OrderId.eq(order_id))
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Create-or-update of the 1:1 payment row, mirroring the single payment
    /// slot an order gets.
    pub async fn upsert_payment<C: ConnectionTrait>(
        db_connection: &C,
        order_id: Uuid,
        method: PaymentMethod,
        status: PaymentStatus,
        amount_cents: i64,
        reference: &str,
    ) -> Result<payment::Model> {
        match Self::find_payment_by_order(db_connection, order_id).await? {
            Some(existing) => {
                let mut active: payment::ActiveModel = existing.into();
                active.method = Set(method);
                active.status = Set(status);
                active.amount_cents = Set(amount_cents);
                active.reference = Set(Some(reference.to_string()));
                active.paid_at = Set(Utc::now());

                active
                    .update(db_connection)
                    .await
                    .map_err(AppError::DatabaseError)
            }
            None => {
                let payment = payment::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    order_id: Set(order_id),
                    method: Set(method),
                    status: Set(status),
                    amount_cents: Set(amount_cents),
                    reference: Set(Some(reference.to_string())),
                    paid_at: Set(Utc::now()),
                };

                payment
                    .insert(db_connection)
                    .await
                    .map_err(AppError::DatabaseError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};
    use uuid::Uuid;

    use super::OrderRepository;

    #[test]
    fn sales_query_scopes_to_the_artist_and_newest_orders() {
        let sql = OrderRepository::sales_query(Uuid::new_v4())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""artworks"."artist_id""#));
        assert!(sql.contains(r#""orders""#));
        assert!(sql.contains(r#""orders"."created_at" DESC"#));
    }
}
