use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    db::entities::{Artwork, Cart, CartItem, artwork, cart, cart_item},
    error::{AppError, Result},
};

pub struct CartRepository;

impl CartRepository {
    pub async fn get_or_create_cart<C: ConnectionTrait>(
        db_connection: &C,
        user_id: Uuid,
    ) -> Result<cart::Model> {
        if let Some(existing) = Cart::find()
            .filter(cart::Column::UserId.eq(user_id))
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)?
        {
            return Ok(existing);
        }

        let cart = cart::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            updated_at: Set(Utc::now()),
        };

        cart.insert(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn items_with_artworks<C: ConnectionTrait>(
        db_connection: &C,
        cart_id: Uuid,
    ) -> Result<Vec<(cart_item::Model, Option<artwork::Model>)>> {
        CartItem::find()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .find_also_related(Artwork)
            .all(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Atomic upsert-increment: bump the existing line in place, insert a
    /// fresh one only when no row was touched.
    pub async fn add_quantity<C: ConnectionTrait>(
        db_connection: &C,
        cart_id: Uuid,
        artwork_id: Uuid,
        quantity: i32,
    ) -> Result<()> {
        let result = CartItem::update_many()
            .col_expr(
                cart_item::Column::Quantity,
                Expr::col(cart_item::Column::Quantity).add(quantity),
            )
            .filter(cart_item::Column::CartId.eq(cart_id))
            .filter(cart_item::Column::ArtworkId.eq(artwork_id))
            .exec(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        if result.rows_affected == 0 {
            let item = cart_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                cart_id: Set(cart_id),
                artwork_id: Set(artwork_id),
                quantity: Set(quantity),
            };

            item.insert(db_connection)
                .await
                .map_err(AppError::DatabaseError)?;
        }

        Self::touch_cart(db_connection, cart_id).await
    }

    pub async fn find_item<C: ConnectionTrait>(
        db_connection: &C,
        cart_id: Uuid,
        artwork_id: Uuid,
    ) -> Result<Option<cart_item::Model>> {
        CartItem::find()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .filter(cart_item::Column::ArtworkId.eq(artwork_id))
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn remove_item<C: ConnectionTrait>(
        db_connection: &C,
        cart_id: Uuid,
        artwork_id: Uuid,
    ) -> Result<bool> {
        let result = CartItem::delete_many()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .filter(cart_item::Column::ArtworkId.eq(artwork_id))
            .exec(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        if result.rows_affected > 0 {
            Self::touch_cart(db_connection, cart_id).await?;
        }

        Ok(result.rows_affected > 0)
    }

    pub async fn clear_items<C: ConnectionTrait>(db_connection: &C, cart_id: Uuid) -> Result<()> {
        CartItem::delete_many()
            .filter(cart_item::Column::CartId.eq(cart_id))
            .exec(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        Self::touch_cart(db_connection, cart_id).await
    }

    async fn touch_cart<C: ConnectionTrait>(db_connection: &C, cart_id: Uuid) -> Result<()> {
        Cart::update_many()
            .col_expr(cart::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(cart::Column::Id.eq(cart_id))
            .exec(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(())
    }
}
