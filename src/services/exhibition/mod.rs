use chrono::Utc;
use uuid::Uuid;

use crate::{
    AppState,
    db::{
        entities::{
            artwork, exhibition, exhibition::ExhibitionStatus, notification::NotificationKind,
            ticket, ticket_purchase, venue,
        },
        repositories::{
            ExhibitionRepository, NotificationRepository, exhibition::ExhibitionFilters,
            generate_confirmation_code,
        },
    },
    error::{AppError, Result},
};

pub struct ExhibitionListing {
    pub exhibition: exhibition::Model,
    pub venue: Option<venue::Model>,
    pub status: ExhibitionStatus,
}

pub struct ExhibitionDetail {
    pub exhibition: exhibition::Model,
    pub venue: Option<venue::Model>,
    pub status: ExhibitionStatus,
    pub artworks: Vec<artwork::Model>,
    pub tickets: Vec<ticket::Model>,
}

/// Status is derived from today's date at read time, never stored.
pub async fn list_exhibitions(
    state: &AppState,
    filters: ExhibitionFilters,
) -> Result<Vec<ExhibitionListing>> {
    let today = Utc::now().date_naive();

    let rows = ExhibitionRepository::filtered_query(&filters)
        .all(state.db.get_connection())
        .await
        .map_err(AppError::DatabaseError)?;

    Ok(rows
        .into_iter()
        .map(|(exhibition, venue)| {
            let status = exhibition.status_on(today);
            ExhibitionListing {
                exhibition,
                venue,
                status,
            }
        })
        .collect())
}

pub async fn exhibition_detail(state: &AppState, exhibition_id: Uuid) -> Result<ExhibitionDetail> {
    let db_connection = state.db.get_connection();

    let (exhibition, venue) =
        ExhibitionRepository::find_exhibition_with_venue(db_connection, exhibition_id)
            .await?
            .ok_or(AppError::ExhibitionNotFound)?;

    let artworks = ExhibitionRepository::approved_artworks(db_connection, &exhibition).await?;
    let tickets = ExhibitionRepository::tickets_for_exhibition(db_connection, exhibition_id).await?;

    let status = exhibition.status_on(Utc::now().date_naive());

    Ok(ExhibitionDetail {
        exhibition,
        venue,
        status,
        artworks,
        tickets,
    })
}

pub async fn list_venues(state: &AppState) -> Result<Vec<venue::Model>> {
    ExhibitionRepository::list_venues(state.db.get_connection()).await
}

/// Ticket purchase mirrors checkout: one transaction, one conditional stock
/// decrement, a confirmation code generated exactly once.
pub async fn purchase_ticket(
    state: &AppState,
    buyer_id: Uuid,
    exhibition_id: Uuid,
    ticket_id: Uuid,
    quantity: i32,
) -> Result<ticket_purchase::Model> {
    if quantity < 1 {
        return Err(AppError::InvalidParams("Quantity must be at least 1".into()));
    }

    let db_transaction = state.db.begin_transaction().await?;

    let ticket = ExhibitionRepository::find_ticket_by_id(&db_transaction, ticket_id)
        .await?
        .ok_or(AppError::TicketNotFound)?;

    if ticket.exhibition_id != exhibition_id {
        db_transaction.rollback().await?;
        return Err(AppError::TicketNotFound);
    }

    if !ExhibitionRepository::try_decrement_ticket_stock(&db_transaction, ticket.id, quantity)
        .await?
    {
        db_transaction.rollback().await?;
        return Err(AppError::OutOfStock);
    }

    let confirmation_code = generate_confirmation_code();
    let total_cents = quantity as i64 * ticket.price_cents;

    let purchase = ExhibitionRepository::create_ticket_purchase(
        &db_transaction,
        ticket.id,
        buyer_id,
        quantity,
        total_cents,
        &confirmation_code,
    )
    .await?;

    NotificationRepository::create_notification(
        &db_transaction,
        buyer_id,
        "Ticket confirmed",
        &format!(
            "Your {} ticket(s) are confirmed. Confirmation code: {}.",
            quantity, confirmation_code
        ),
        NotificationKind::Exhibition,
        Some(exhibition_id),
    )
    .await?;

    db_transaction
        .commit()
        .await
        .map_err(AppError::DatabaseError)?;

    tracing::info!(
        ticket_id = %ticket.id,
        buyer_id = %buyer_id,
        quantity,
        "Ticket purchase confirmed"
    );

    Ok(purchase)
}
