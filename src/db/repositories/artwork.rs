use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder, Select, SelectTwo,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use uuid::Uuid;

use crate::{
    db::entities::{
        Artist, Artwork, artist, artwork,
        artwork::{ArtworkStatus, ReviewOutcome},
    },
    error::{AppError, Result},
};

#[derive(Debug, Default, Clone)]
pub struct ArtworkFilters {
    pub text: Option<String>,
    pub category_id: Option<Uuid>,
    pub artist_id: Option<Uuid>,
    pub technique: Option<String>,
    pub price_min_cents: Option<i64>,
    pub price_max_cents: Option<i64>,
    pub sort: ArtworkSort,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ArtworkSort {
    #[default]
    Recent,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
    YearAsc,
    YearDesc,
}

impl ArtworkSort {
    /// Filtering is best-effort: unknown sort keys fall back to the default.
    pub fn parse(value: &str) -> Self {
        match value {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "title_asc" => Self::TitleAsc,
            "title_desc" => Self::TitleDesc,
            "year_asc" => Self::YearAsc,
            "year_desc" => Self::YearDesc,
            _ => Self::Recent,
        }
    }
}

pub struct NewArtwork {
    pub artist_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub technique: String,
    pub year: Option<i32>,
    pub price_cents: i64,
    pub stock: i32,
}

pub struct ArtworkRepository;

impl ArtworkRepository {
    pub async fn find_artwork_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<artwork::Model>> {
        Artwork::find_by_id(id)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn find_artwork_with_artist<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<(artwork::Model, Option<artist::Model>)>> {
        Artwork::find_by_id(id)
            .find_also_related(Artist)
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Storefront query: approved artworks only, filters applied best-effort.
    pub fn approved_query(filters: &ArtworkFilters) -> SelectTwo<Artwork, Artist> {
        let mut query = Artwork::find()
            .find_also_related(Artist)
            .filter(artwork::Column::Status.eq(ArtworkStatus::Approved));

        if let Some(text) = &filters.text {
            let pattern = format!("%{}%", text);
            query = query.filter(
                Condition::any()
                    .add(Expr::col((artwork::Entity, artwork::Column::Title)).ilike(&pattern))
                    .add(Expr::col((artwork::Entity, artwork::Column::Description)).ilike(&pattern))
                    .add(Expr::col((artist::Entity, artist::Column::Name)).ilike(&pattern)),
            );
        }

        if let Some(category_id) = filters.category_id {
            query = query.filter(artwork::Column::CategoryId.eq(category_id));
        }

        if let Some(artist_id) = filters.artist_id {
            query = query.filter(artwork::Column::ArtistId.eq(artist_id));
        }

        if let Some(technique) = &filters.technique {
            let pattern = format!("%{}%", technique);
            query = query
                .filter(Expr::col((artwork::Entity, artwork::Column::Technique)).ilike(&pattern));
        }

        if let Some(min) = filters.price_min_cents {
            query = query.filter(artwork::Column::PriceCents.gte(min));
        }

        if let Some(max) = filters.price_max_cents {
            query = query.filter(artwork::Column::PriceCents.lte(max));
        }

        match filters.sort {
            ArtworkSort::Recent => query.order_by_desc(artwork::Column::SubmittedAt),
            ArtworkSort::PriceAsc => query.order_by_asc(artwork::Column::PriceCents),
            ArtworkSort::PriceDesc => query.order_by_desc(artwork::Column::PriceCents),
            ArtworkSort::TitleAsc => query.order_by_asc(artwork::Column::Title),
            ArtworkSort::TitleDesc => query.order_by_desc(artwork::Column::Title),
            ArtworkSort::YearAsc => query.order_by_asc(artwork::Column::Year),
            ArtworkSort::YearDesc => query.order_by_desc(artwork::Column::Year),
        }
    }

    pub fn pending_query() -> SelectTwo<Artwork, Artist> {
        Artwork::find()
            .find_also_related(Artist)
            .filter(artwork::Column::Status.eq(ArtworkStatus::Pending))
            .order_by_desc(artwork::Column::SubmittedAt)
    }

    pub fn by_artist_query(artist_id: Uuid) -> Select<Artwork> {
        Artwork::find()
            .filter(artwork::Column::ArtistId.eq(artist_id))
            .order_by_desc(artwork::Column::SubmittedAt)
    }

    pub async fn create_artwork<C: ConnectionTrait>(
        db_connection: &C,
        new: NewArtwork,
    ) -> Result<artwork::Model> {
        let artwork = artwork::ActiveModel {
            id: Set(Uuid::new_v4()),
            artist_id: Set(new.artist_id),
            category_id: Set(new.category_id),
            title: Set(new.title),
            description: Set(new.description),
            image_ref: Set(new.image_ref),
            technique: Set(new.technique),
            year: Set(new.year),
            price_cents: Set(new.price_cents),
            stock: Set(new.stock),
            status: Set(ArtworkStatus::Pending),
            submitted_at: Set(Utc::now()),
            validated_at: Set(None),
        };

        artwork
            .insert(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Applies a curator decision. A repeated identical decision is a no-op
    /// that keeps the original validation time.
    pub async fn review_artwork<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
        target: ArtworkStatus,
    ) -> Result<artwork::Model> {
        let artwork = Self::find_artwork_by_id(db_connection, id)
            .await?
            .ok_or(AppError::ArtworkNotFound)?;

        match artwork.status.review_outcome(target) {
            ReviewOutcome::NoOp => Ok(artwork),
            ReviewOutcome::Invalid => Err(AppError::InvalidStatusTransition),
            ReviewOutcome::Apply => {
                let mut active: artwork::ActiveModel = artwork.into();
                active.status = Set(target);
                active.validated_at = Set(Some(Utc::now()));

                active
                    .update(db_connection)
                    .await
                    .map_err(AppError::DatabaseError)
            }
        }
    }

    fn decrement_stock_stmt(artwork_id: Uuid, quantity: i32) -> sea_orm::UpdateMany<Artwork> {
        Artwork::update_many()
            .col_expr(
                artwork::Column::Stock,
                Expr::col(artwork::Column::Stock).sub(quantity),
            )
            .filter(artwork::Column::Id.eq(artwork_id))
            .filter(artwork::Column::Stock.gte(quantity))
    }

    /// Atomic conditional decrement: succeeds only when enough stock remains,
    /// so two concurrent checkouts cannot both take the last unit.
    pub async fn try_decrement_stock<C: ConnectionTrait>(
        db_connection: &C,
        artwork_id: Uuid,
        quantity: i32,
    ) -> Result<bool> {
        let result = Self::decrement_stock_stmt(artwork_id, quantity)
            .exec(db_connection)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(result.rows_affected == 1)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};
    use uuid::Uuid;

    use super::{ArtworkFilters, ArtworkRepository, ArtworkSort};

    #[test]
    fn sort_keys_parse_with_best_effort_fallback() {
        assert_eq!(ArtworkSort::parse("price_asc"), ArtworkSort::PriceAsc);
        assert_eq!(ArtworkSort::parse("year_desc"), ArtworkSort::YearDesc);
        assert_eq!(ArtworkSort::parse("recent"), ArtworkSort::Recent);
        assert_eq!(ArtworkSort::parse("garbage"), ArtworkSort::Recent);
        assert_eq!(ArtworkSort::parse(""), ArtworkSort::Recent);
    }

    #[test]
    fn storefront_query_only_sees_approved_artworks() {
        let sql = ArtworkRepository::approved_query(&ArtworkFilters::default())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""status" = 'approved'"#));
        assert!(sql.contains(r#""submitted_at" DESC"#));
    }

    #[test]
    fn text_filter_matches_title_description_and_artist_name() {
        let filters = ArtworkFilters {
            text: Some("dawn".into()),
            ..Default::default()
        };
        let sql = ArtworkRepository::approved_query(&filters)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("ILIKE"));
        assert!(sql.contains(r#""artworks"."title""#));
        assert!(sql.contains(r#""artists"."name""#));
    }

    #[test]
    fn stock_decrement_is_conditional() {
        let sql = ArtworkRepository::decrement_stock_stmt(Uuid::new_v4(), 2)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""stock" = "stock" - 2"#));
        assert!(sql.contains(r#""stock" >= 2"#));
    }
}
