use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    AppState,
    db::{
        entities::{Category, artist, artwork, artwork::ArtworkStatus, category, user},
        repositories::{
            ArtworkRepository, UserRepository,
            artwork::{ArtworkFilters, NewArtwork},
        },
    },
    error::{AppError, Result},
};

pub struct ArtworkPage {
    pub items: Vec<(artwork::Model, Option<artist::Model>)>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

fn clamp_per_page(state: &AppState, per_page: Option<u64>) -> u64 {
    per_page
        .unwrap_or(state.config.store.default_page_size)
        .clamp(1, state.config.store.max_page_size)
}

/// Public storefront listing. Only approved artworks are visible and pages
/// are 1-based.
pub async fn list_artworks(
    state: &AppState,
    filters: ArtworkFilters,
    page: Option<u64>,
    per_page: Option<u64>,
) -> Result<ArtworkPage> {
    let db_connection = state.db.get_connection();

    let page = page.unwrap_or(1).max(1);
    let per_page = clamp_per_page(state, per_page);

    let paginator = ArtworkRepository::approved_query(&filters).paginate(db_connection, per_page);

    let total_items = paginator.num_items().await.map_err(AppError::DatabaseError)?;
    let total_pages = total_items.div_ceil(per_page).max(1);
    let items = paginator
        .fetch_page(page - 1)
        .await
        .map_err(AppError::DatabaseError)?;

    Ok(ArtworkPage {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    })
}

/// Detail lookups go by id regardless of status; only the listing hides
/// unapproved pieces.
pub async fn artwork_detail(
    state: &AppState,
    artwork_id: Uuid,
) -> Result<(artwork::Model, Option<artist::Model>)> {
    ArtworkRepository::find_artwork_with_artist(state.db.get_connection(), artwork_id)
        .await?
        .ok_or(AppError::ArtworkNotFound)
}

pub async fn list_categories(state: &AppState) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(state.db.get_connection())
        .await
        .map_err(AppError::DatabaseError)
}

pub struct ArtworkSubmission {
    pub category_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub technique: String,
    pub year: Option<i32>,
    pub price_cents: i64,
    pub stock: i32,
}

fn validate_submission(title: &str, price_cents: i64, stock: i32) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidParams("Title is required".into()));
    }
    if price_cents < 0 {
        return Err(AppError::InvalidParams("Price cannot be negative".into()));
    }
    if stock < 0 {
        return Err(AppError::InvalidParams("Stock cannot be negative".into()));
    }
    Ok(())
}

/// New submissions always enter the review queue as pending.
pub async fn submit_artwork(
    state: &AppState,
    actor: &user::Model,
    submission: ArtworkSubmission,
) -> Result<artwork::Model> {
    validate_submission(&submission.title, submission.price_cents, submission.stock)?;

    if !state.config.media.accepts(&submission.image_ref) {
        return Err(AppError::InvalidParams("Invalid image reference".into()));
    }

    let db_connection = state.db.get_connection();

    let artist = UserRepository::find_artist_profile(db_connection, actor.id)
        .await?
        .ok_or(AppError::Forbidden)?;

    ArtworkRepository::create_artwork(
        db_connection,
        NewArtwork {
            artist_id: artist.id,
            category_id: submission.category_id,
            title: submission.title,
            description: submission.description,
            image_ref: submission.image_ref,
            technique: submission.technique,
            year: submission.year,
            price_cents: submission.price_cents,
            stock: submission.stock,
        },
    )
    .await
}

#[derive(Default)]
pub struct ArtworkUpdate {
    pub category_id: Option<Option<Uuid>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_ref: Option<String>,
    pub technique: Option<String>,
    pub year: Option<Option<i32>>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
}

/// Only the fields present on a partial update are validated.
fn validate_update(update: &ArtworkUpdate) -> Result<()> {
    if let Some(title) = &update.title
        && title.trim().is_empty()
    {
        return Err(AppError::InvalidParams("Title is required".into()));
    }

    if let Some(price_cents) = update.price_cents
        && price_cents < 0
    {
        return Err(AppError::InvalidParams("Price cannot be negative".into()));
    }

    if let Some(stock) = update.stock
        && stock < 0
    {
        return Err(AppError::InvalidParams("Stock cannot be negative".into()));
    }

    Ok(())
}

/// Artists may only edit their own pieces, and only while review is pending.
/// Approved or rejected artworks are frozen.
pub async fn update_artwork(
    state: &AppState,
    actor: &user::Model,
    artwork_id: Uuid,
    update: ArtworkUpdate,
) -> Result<artwork::Model> {
    let db_connection = state.db.get_connection();

    let artist = UserRepository::find_artist_profile(db_connection, actor.id)
        .await?
        .ok_or(AppError::Forbidden)?;

    let artwork = ArtworkRepository::find_artwork_by_id(db_connection, artwork_id)
        .await?
        .ok_or(AppError::ArtworkNotFound)?;

    if artwork.artist_id != artist.id {
        return Err(AppError::Forbidden);
    }

    if artwork.status != ArtworkStatus::Pending {
        return Err(AppError::NotEditable);
    }

    validate_update(&update)?;

    if let Some(image_ref) = &update.image_ref
        && !state.config.media.accepts(image_ref)
    {
        return Err(AppError::InvalidParams("Invalid image reference".into()));
    }

    let mut active: artwork::ActiveModel = artwork.into();

    if let Some(category_id) = update.category_id {
        active.category_id = Set(category_id);
    }
    if let Some(title) = update.title {
        active.title = Set(title);
    }
    if let Some(description) = update.description {
        active.description = Set(description);
    }
    if let Some(image_ref) = update.image_ref {
        active.image_ref = Set(image_ref);
    }
    if let Some(technique) = update.technique {
        active.technique = Set(technique);
    }
    if let Some(year) = update.year {
        active.year = Set(year);
    }
    if let Some(price_cents) = update.price_cents {
        active.price_cents = Set(price_cents);
    }
    if let Some(stock) = update.stock {
        active.stock = Set(stock);
    }

    active
        .update(db_connection)
        .await
        .map_err(AppError::DatabaseError)
}

pub async fn my_artworks(state: &AppState, actor: &user::Model) -> Result<Vec<artwork::Model>> {
    let db_connection = state.db.get_connection();

    let artist = UserRepository::find_artist_profile(db_connection, actor.id)
        .await?
        .ok_or(AppError::Forbidden)?;

    ArtworkRepository::by_artist_query(artist.id)
        .all(db_connection)
        .await
        .map_err(AppError::DatabaseError)
}

pub async fn pending_artworks(
    state: &AppState,
    actor: &user::Model,
) -> Result<Vec<(artwork::Model, Option<artist::Model>)>> {
    if !actor.role.is_staff() {
        return Err(AppError::Forbidden);
    }

    ArtworkRepository::pending_query()
        .all(state.db.get_connection())
        .await
        .map_err(AppError::DatabaseError)
}

/// Curator decision. Approve and reject share one path since only the target
/// status differs.
pub async fn review_artwork(
    state: &AppState,
    actor: &user::Model,
    artwork_id: Uuid,
    target: ArtworkStatus,
) -> Result<artwork::Model> {
    if !actor.role.is_staff() {
        return Err(AppError::Forbidden);
    }

    let artwork =
        ArtworkRepository::review_artwork(state.db.get_connection(), artwork_id, target).await?;

    tracing::info!(artwork_id = %artwork.id, status = ?artwork.status, "Artwork reviewed");

    Ok(artwork)
}

#[cfg(test)]
mod tests {
    use super::{ArtworkUpdate, validate_submission, validate_update};

    #[test]
    fn rejects_blank_titles_and_negative_amounts() {
        assert!(validate_submission("", 100, 1).is_err());
        assert!(validate_submission("   ", 100, 1).is_err());
        assert!(validate_submission("Dawn", -1, 1).is_err());
        assert!(validate_submission("Dawn", 100, -1).is_err());
        assert!(validate_submission("Dawn", 0, 0).is_ok());
    }

    #[test]
    fn partial_updates_only_validate_supplied_fields() {
        assert!(validate_update(&ArtworkUpdate::default()).is_ok());

        let update = ArtworkUpdate {
            price_cents: Some(2500),
            ..Default::default()
        };
        assert!(validate_update(&update).is_ok());

        let update = ArtworkUpdate {
            title: Some("  ".into()),
            ..Default::default()
        };
        assert!(validate_update(&update).is_err());

        let update = ArtworkUpdate {
            price_cents: Some(-1),
            ..Default::default()
        };
        assert!(validate_update(&update).is_err());

        let update = ArtworkUpdate {
            stock: Some(-5),
            ..Default::default()
        };
        assert!(validate_update(&update).is_err());
    }
}
