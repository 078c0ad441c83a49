use axum::{
    Json,
    extract::{Path, Query, State},
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
        ArtworkListQuery, ArtworkResponse, CategoryResponse, Paginated, SubmitArtworkRequest,
        UpdateArtworkRequest,
    },
    db::entities::artwork::ArtworkStatus,
    error::Result,
    services::catalog::{self, ArtworkSubmission, ArtworkUpdate},
};

pub async fn list_artworks(
    State(state): State<AppState>,
    Query(query): Query<ArtworkListQuery>,
) -> Result<Json<Paginated<ArtworkResponse>>> {
    let page = catalog::list_artworks(&state, query.filters(), query.page(), query.per_page()).await?;

    Ok(Json(Paginated {
        items: page
            .items
            .into_iter()
            .map(|(artwork, artist)| ArtworkResponse::from_pair(artwork, artist))
            .collect(),
        page: page.page,
        per_page: page.per_page,
        total_items: page.total_items,
        total_pages: page.total_pages,
    }))
}

pub async fn artwork_detail(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
) -> Result<Json<ArtworkResponse>> {
    let (artwork, artist) = catalog::artwork_detail(&state, artwork_id).await?;

    Ok(Json(ArtworkResponse::from_pair(artwork, artist)))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>> {
    let categories = catalog::list_categories(&state).await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

pub async fn my_artworks(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Vec<ArtworkResponse>>> {
    let actor = current_user(&state, &bearer).await?;

    let artworks = catalog::my_artworks(&state, &actor).await?;

    Ok(Json(artworks.into_iter().map(ArtworkResponse::from).collect()))
}

pub async fn submit_artwork(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<SubmitArtworkRequest>,
) -> Result<Json<ArtworkResponse>> {
    let actor = current_user(&state, &bearer).await?;

    let artwork = catalog::submit_artwork(
        &state,
        &actor,
        ArtworkSubmission {
            category_id: request.category_id,
            title: request.title,
            description: request.description,
            image_ref: request.image_ref,
            technique: request.technique,
            year: request.year,
            price_cents: request.price_cents,
            stock: request.stock,
        },
    )
    .await?;

    Ok(Json(ArtworkResponse::from(artwork)))
}

pub async fn update_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<UpdateArtworkRequest>,
) -> Result<Json<ArtworkResponse>> {
    let actor = current_user(&state, &bearer).await?;

    let artwork = catalog::update_artwork(
        &state,
        &actor,
        artwork_id,
        ArtworkUpdate {
            category_id: request.category_id.map(Some),
            title: request.title,
            description: request.description,
            image_ref: request.image_ref,
            technique: request.technique,
            year: request.year.map(Some),
            price_cents: request.price_cents,
            stock: request.stock,
        },
    )
    .await?;

    Ok(Json(ArtworkResponse::from(artwork)))
}

pub async fn pending_artworks(
    State(state): State<AppState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Vec<ArtworkResponse>>> {
    let actor = current_user(&state, &bearer).await?;

    let artworks = catalog::pending_artworks(&state, &actor).await?;

    Ok(Json(
        artworks
            .into_iter()
            .map(|(artwork, artist)| ArtworkResponse::from_pair(artwork, artist))
            .collect(),
    ))
}

pub async fn approve_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<ArtworkResponse>> {
    review(state, artwork_id, bearer, ArtworkStatus::Approved).await
}

pub async fn reject_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<ArtworkResponse>> {
    review(state, artwork_id, bearer, ArtworkStatus::Rejected).await
}

async fn review(
    state: AppState,
    artwork_id: Uuid,
    bearer: Authorization<Bearer>,
    target: ArtworkStatus,
) -> Result<Json<ArtworkResponse>> {
    let actor = current_user(&state, &bearer).await?;

    let artwork = catalog::review_artwork(&state, &actor, artwork_id, target).await?;

    Ok(Json(ArtworkResponse::from(artwork)))
}
