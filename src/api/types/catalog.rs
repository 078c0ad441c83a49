use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{parse_i64, parse_u64, parse_uuid};
use crate::db::{
    entities::{artist, artwork, artwork::ArtworkStatus, category},
    repositories::artwork::{ArtworkFilters, ArtworkSort},
};

#[derive(Debug, Serialize)]
pub struct ArtistSummary {
    pub id: Uuid,
    pub name: String,
    pub nationality: String,
}

impl From<artist::Model> for ArtistSummary {
    fn from(artist: artist::Model) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            nationality: artist.nationality,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub technique: String,
    pub year: Option<i32>,
    pub price_cents: i64,
    pub stock: i32,
    pub status: ArtworkStatus,
    pub category_id: Option<Uuid>,
    pub artist: Option<ArtistSummary>,
    pub submitted_at: DateTime<Utc>,
}

impl ArtworkResponse {
    pub fn from_pair(artwork: artwork::Model, artist: Option<artist::Model>) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title,
            description: artwork.description,
            image_ref: artwork.image_ref,
            technique: artwork.technique,
            year: artwork.year,
            price_cents: artwork.price_cents,
            stock: artwork.stock,
            status: artwork.status,
            category_id: artwork.category_id,
            artist: artist.map(ArtistSummary::from),
            submitted_at: artwork.submitted_at,
        }
    }
}

impl From<artwork::Model> for ArtworkResponse {
    fn from(artwork: artwork::Model) -> Self {
        Self::from_pair(artwork, None)
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(category: category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

/// All fields arrive as raw strings so a bad value never rejects the whole
/// request; it is simply ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ArtworkListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub artist: Option<String>,
    pub technique: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ArtworkListQuery {
    pub fn filters(&self) -> ArtworkFilters {
        ArtworkFilters {
            text: self.q.clone().filter(|q| !q.trim().is_empty()),
            category_id: parse_uuid(self.category.as_deref()),
            artist_id: parse_uuid(self.artist.as_deref()),
            technique: self.technique.clone().filter(|t| !t.trim().is_empty()),
            price_min_cents: parse_i64(self.price_min.as_deref()),
            price_max_cents: parse_i64(self.price_max.as_deref()),
            sort: self
                .sort
                .as_deref()
                .map(ArtworkSort::parse)
                .unwrap_or_default(),
        }
    }

    pub fn page(&self) -> Option<u64> {
        parse_u64(self.page.as_deref())
    }

    pub fn per_page(&self) -> Option<u64> {
        parse_u64(self.per_page.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitArtworkRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_ref: String,
    #[serde(default)]
    pub technique: String,
    pub year: Option<i32>,
    pub price_cents: i64,
    pub stock: i32,
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateArtworkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_ref: Option<String>,
    pub technique: Option<String>,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub category_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::ArtworkListQuery;
    use crate::db::repositories::artwork::ArtworkSort;

    #[test]
    fn garbage_filters_fall_away_silently() {
        let query = ArtworkListQuery {
            q: Some("  ".into()),
            category: Some("not-a-uuid".into()),
            price_min: Some("cheap".into()),
            price_max: Some("5000".into()),
            sort: Some("bogus".into()),
            page: Some("two".into()),
            ..Default::default()
        };

        let filters = query.filters();
        assert!(filters.text.is_none());
        assert!(filters.category_id.is_none());
        assert!(filters.price_min_cents.is_none());
        assert_eq!(filters.price_max_cents, Some(5000));
        assert_eq!(filters.sort, ArtworkSort::Recent);
        assert!(query.page().is_none());
    }
}
