use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artworks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(indexed)]
    pub artist_id: Uuid,

    #[sea_orm(nullable, indexed)]
    pub category_id: Option<Uuid>,

    pub title: String,

    pub description: String,

    pub image_ref: String,

    pub technique: String,

    #[sea_orm(nullable)]
    pub year: Option<i32>,

    pub price_cents: i64,

    pub stock: i32,

    pub status: ArtworkStatus,

    pub submitted_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub validated_at: Option<DateTimeUtc>,
}

#[derive(Clone, Copy, Debug, Default, EnumIter, DeriveActiveEnum, PartialEq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ArtworkStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "approved")]
    Approved,

    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ArtworkStatus {
    /// A review decision only ever moves a pending artwork to a terminal
    /// status. Re-applying the same terminal status is a no-op.
    pub fn review_outcome(&self, target: ArtworkStatus) -> ReviewOutcome {
        match (self, target) {
            (ArtworkStatus::Pending, ArtworkStatus::Approved)
            | (ArtworkStatus::Pending, ArtworkStatus::Rejected) => ReviewOutcome::Apply,
            (current, target) if *current == target => ReviewOutcome::NoOp,
            _ => ReviewOutcome::Invalid,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ReviewOutcome {
    Apply,
    NoOp,
    Invalid,
}

impl Model {
    pub fn is_purchasable(&self) -> bool {
        self.status == ArtworkStatus::Approved && self.stock > 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id"
    )]
    Artist,

    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,

    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLines,

    #[sea_orm(has_many = "super::cart_item::Entity")]
    CartItems,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::exhibition::Entity> for Entity {
    fn to() -> RelationDef {
        super::exhibition_artwork::Relation::Exhibition.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::exhibition_artwork::Relation::Artwork.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{ArtworkStatus, Model, ReviewOutcome};

    fn artwork(status: ArtworkStatus, stock: i32) -> Model {
        Model {
            id: Uuid::new_v4(),
            artist_id: Uuid::new_v4(),
            category_id: None,
            title: "Untitled".into(),
            description: String::new(),
            image_ref: "artworks/untitled.png".into(),
            technique: String::new(),
            year: None,
            price_cents: 1000,
            stock,
            status,
            submitted_at: Utc::now(),
            validated_at: None,
        }
    }

    #[test]
    fn purchasable_requires_approved_and_stock() {
        assert!(artwork(ArtworkStatus::Approved, 1).is_purchasable());
        assert!(!artwork(ArtworkStatus::Approved, 0).is_purchasable());
        assert!(!artwork(ArtworkStatus::Pending, 5).is_purchasable());
        assert!(!artwork(ArtworkStatus::Rejected, 5).is_purchasable());
    }

    #[test]
    fn review_applies_only_from_pending() {
        assert_eq!(
            ArtworkStatus::Pending.review_outcome(ArtworkStatus::Approved),
            ReviewOutcome::Apply
        );
        assert_eq!(
            ArtworkStatus::Pending.review_outcome(ArtworkStatus::Rejected),
            ReviewOutcome::Apply
        );
    }

    #[test]
    fn repeated_review_is_a_noop() {
        assert_eq!(
            ArtworkStatus::Approved.review_outcome(ArtworkStatus::Approved),
            ReviewOutcome::NoOp
        );
        assert_eq!(
            ArtworkStatus::Rejected.review_outcome(ArtworkStatus::Rejected),
            ReviewOutcome::NoOp
        );
    }

    #[test]
    fn flipping_a_decided_status_is_invalid() {
        assert_eq!(
            ArtworkStatus::Approved.review_outcome(ArtworkStatus::Rejected),
            ReviewOutcome::Invalid
        );
        assert_eq!(
            ArtworkStatus::Rejected.review_outcome(ArtworkStatus::Approved),
            ReviewOutcome::Invalid
        );
    }
}
