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
        ExhibitionDetailResponse, ExhibitionListQuery, ExhibitionResponse, PurchaseTicketRequest,
        TicketPurchaseResponse, VenueResponse,
    },
    error::Result,
    services::exhibition,
};

pub async fn list_exhibitions(
    State(state): State<AppState>,
    Query(query): Query<ExhibitionListQuery>,
) -> Result<Json<Vec<ExhibitionResponse>>> {
    let listings = exhibition::list_exhibitions(&state, query.filters()).await?;

    Ok(Json(
        listings.into_iter().map(ExhibitionResponse::from).collect(),
    ))
}

pub async fn exhibition_detail(
    State(state): State<AppState>,
    Path(exhibition_id): Path<Uuid>,
) -> Result<Json<ExhibitionDetailResponse>> {
    let detail = exhibition::exhibition_detail(&state, exhibition_id).await?;

    Ok(Json(ExhibitionDetailResponse::from(detail)))
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<VenueResponse>>> {
    let venues = exhibition::list_venues(&state).await?;

    Ok(Json(venues.into_iter().map(VenueResponse::from).collect()))
}

pub async fn purchase_ticket(
    State(state): State<AppState>,
    Path((exhibition_id, ticket_id)): Path<(Uuid, Uuid)>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<PurchaseTicketRequest>,
) -> Result<Json<TicketPurchaseResponse>> {
    let user = current_user(&state, &bearer).await?;

    let purchase =
        exhibition::purchase_ticket(&state, user.id, exhibition_id, ticket_id, request.quantity)
            .await?;

    Ok(Json(TicketPurchaseResponse::from(purchase)))
}
