use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, SelectTwo,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use uuid::Uuid;

use crate::{
    db::entities::{
        Artwork, Exhibition, Ticket, Venue, artwork, artwork::ArtworkStatus, exhibition, ticket,
        ticket_purchase, venue,
    },
    error::{AppError, Result},
};

#[derive(Debug, Default, Clone)]
pub struct ExhibitionFilters {
    pub text: Option<String>,
    pub city: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

pub struct ExhibitionRepository;

impl ExhibitionRepository {
    pub fn filtered_query(filters: &ExhibitionFilters) -> SelectTwo<Exhibition, Venue> {
        let mut query = Exhibition::find().find_also_related(Venue);

        if let Some(text) = &filters.text {
            let pattern = format!("%{}%", text);
            query = query.filter(
                sea_orm::Condition::any()
                    .add(Expr::col((exhibition::Entity, exhibition::Column::Name)).ilike(&pattern))
                    .add(
                        Expr::col((exhibition::Entity, exhibition::Column::Description))
                            .ilike(&pattern),
                    ),
            );
        }

        if let Some(city) = &filters.city {
            let pattern = format!("%{}%", city);
            query = query.filter(Expr::col((venue::Entity, venue::Column::City)).ilike(&pattern));
        }

        if let Some(from) = filters.date_from {
            query = query.filter(exhibition::Column::StartDate.gte(from));
        }

        if let Some(to) = filters.date_to {
            query = query.filter(exhibition::Column::EndDate.lte(to));
        }

        query.order_by_desc(exhibition::Column::StartDate)
    }

    pub async fn find_exhibition_with_venue<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<(exhibition::Model, Option<venue::Model>)>> {
        Exhibition::find_by_id(id)
            .find_also_related(Venue)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn approved_artworks<C: ConnectionTrait>(
        db_connection: &C,
        exhibition: &exhibition::Model,
    ) -> Result<Vec<artwork::Model>> {
        exhibition
            .find_related(Artwork)
            .filter(artwork::Column::Status.eq(ArtworkStatus::Approved))
            .all(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn list_venues<C: ConnectionTrait>(db_connection: &C) -> Result<Vec<venue::Model>> {
        Venue::find()
            .order_by_asc(venue::Column::Name)
            .all(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn tickets_for_exhibition<C: ConnectionTrait>(
        db_connection: &C,
        exhibition_id: Uuid,
    ) -> Result<Vec<ticket::Model>> {
        Ticket::find()
            .filter(ticket::Column::ExhibitionId.eq(exhibition_id))
            .all(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn find_ticket_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<ticket::Model>> {
        Ticket::find_by_id(id)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Same conditional-decrement contract as artwork stock.
    pub async fn try_decrement_ticket_stock<C: ConnectionTrait>(
        db_connection: &C,
        ticket_id: Uuid,
        quantity: i32,
    ) -> Result<bool> {
        let result = Ticket::update_many()
            .col_expr(
                ticket::Column::StockRemaining,
                Expr::col(ticket::Column::StockRemaining).sub(quantity),
            )
            .filter(ticket::Column::Id.eq(ticket_id))
            .filter(ticket::Column::StockRemaining.gte(quantity))
            .exec(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(result.rows_affected == 1)
    }

    pub async fn create_ticket_purchase<C: ConnectionTrait>(
        db_connection: &C,
        ticket_id: Uuid,
        buyer_id: Uuid,
        quantity: i32,
        total_cents: i64,
        confirmation_code: &str,
    ) -> Result<ticket_purchase::Model> {
        let purchase = ticket_purchase::ActiveModel {
            id: Set(Uuid::new_v4()),
            ticket_id: Set(ticket_id),
            buyer_id: Set(buyer_id),
            quantity: Set(quantity),
            total_cents: Set(total_cents),
            confirmation_code: Set(confirmation_code.to_string()),
            purchased_at: Set(Utc::now()),
        };

        purchase
            .insert(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::{ExhibitionFilters, ExhibitionRepository};

    #[test]
    fn city_filter_reaches_the_venue_join() {
        let filters = ExhibitionFilters {
            city: Some("Paris".into()),
            ..Default::default()
        };
        let sql = ExhibitionRepository::filtered_query(&filters)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""venues"."city""#));
        assert!(sql.contains("ILIKE"));
    }
}
