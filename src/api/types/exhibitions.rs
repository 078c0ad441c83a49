use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{catalog::ArtworkResponse, common::parse_date};
use crate::{
    db::{
        entities::{exhibition::ExhibitionStatus, ticket, ticket_purchase, venue},
        repositories::exhibition::ExhibitionFilters,
    },
    services::exhibition::{ExhibitionDetail, ExhibitionListing},
};

#[derive(Debug, Serialize)]
pub struct VenueResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

impl From<venue::Model> for VenueResponse {
    fn from(venue: venue::Model) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            address: venue.address,
            city: venue.city,
            country: venue.country,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExhibitionResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub poster_ref: Option<String>,
    pub status: ExhibitionStatus,
    pub venue: Option<VenueResponse>,
}

impl From<ExhibitionListing> for ExhibitionResponse {
    fn from(listing: ExhibitionListing) -> Self {
        Self {
            id: listing.exhibition.id,
            name: listing.exhibition.name,
            description: listing.exhibition.description,
            start_date: listing.exhibition.start_date,
            end_date: listing.exhibition.end_date,
            poster_ref: listing.exhibition.poster_ref,
            status: listing.status,
            venue: listing.venue.map(VenueResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub kind: String,
    pub price_cents: i64,
    pub stock_remaining: i32,
}

impl From<ticket::Model> for TicketResponse {
    fn from(ticket: ticket::Model) -> Self {
        Self {
            id: ticket.id,
            kind: ticket.kind,
            price_cents: ticket.price_cents,
            stock_remaining: ticket.stock_remaining,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExhibitionDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub poster_ref: Option<String>,
    pub status: ExhibitionStatus,
    pub venue: Option<VenueResponse>,
    pub artworks: Vec<ArtworkResponse>,
    pub tickets: Vec<TicketResponse>,
}

impl From<ExhibitionDetail> for ExhibitionDetailResponse {
    fn from(detail: ExhibitionDetail) -> Self {
        Self {
            id: detail.exhibition.id,
            name: detail.exhibition.name,
            description: detail.exhibition.description,
            start_date: detail.exhibition.start_date,
            end_date: detail.exhibition.end_date,
            poster_ref: detail.exhibition.poster_ref,
            status: detail.status,
            venue: detail.venue.map(VenueResponse::from),
            artworks: detail
                .artworks
                .into_iter()
                .map(ArtworkResponse::from)
                .collect(),
            tickets: detail.tickets.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ExhibitionListQuery {
    pub q: Option<String>,
    pub city: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl ExhibitionListQuery {
    pub fn filters(&self) -> ExhibitionFilters {
        ExhibitionFilters {
            text: self.q.clone().filter(|q| !q.trim().is_empty()),
            city: self.city.clone().filter(|c| !c.trim().is_empty()),
            date_from: parse_date(self.date_from.as_deref()),
            date_to: parse_date(self.date_to.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PurchaseTicketRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct TicketPurchaseResponse {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub quantity: i32,
    pub total_cents: i64,
    pub confirmation_code: String,
    pub purchased_at: DateTime<Utc>,
}

impl From<ticket_purchase::Model> for TicketPurchaseResponse {
    fn from(purchase: ticket_purchase::Model) -> Self {
        Self {
            id: purchase.id,
            ticket_id: purchase.ticket_id,
            quantity: purchase.quantity,
            total_cents: purchase.total_cents,
            confirmation_code: purchase.confirmation_code,
            purchased_at: purchase.purchased_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExhibitionListQuery;

    #[test]
    fn date_filters_parse_best_effort() {
        let query = ExhibitionListQuery {
            date_from: Some("2026-06-01".into()),
            date_to: Some("soon".into()),
            ..Default::default()
        };

        let filters = query.filters();
        assert!(filters.date_from.is_some());
        assert!(filters.date_to.is_none());
    }
}
