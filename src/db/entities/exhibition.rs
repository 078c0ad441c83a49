use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exhibitions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(nullable, indexed)]
    pub venue_id: Option<Uuid>,

    pub name: String,

    pub description: String,

    pub start_date: Date,

    pub end_date: Date,

    #[sea_orm(nullable)]
    pub poster_ref: Option<String>,
}

/// Derived from the exhibition dates, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhibitionStatus {
    Upcoming,
    Ongoing,
    Ended,
}

impl Model {
    pub fn status_on(&self, today: NaiveDate) -> ExhibitionStatus {
        if today < self.start_date {
            ExhibitionStatus::Upcoming
        } else if today > self.end_date {
            ExhibitionStatus::Ended
        } else {
            ExhibitionStatus::Ongoing
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id"
    )]
    Venue,

    #[sea_orm(has_many = "super::ticket::Entity")]
    Tickets,

    #[sea_orm(has_many = "super::notification::Entity")]
    Notifications,
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl Related<super::artwork::Entity> for Entity {
    fn to() -> RelationDef {
        super::exhibition_artwork::Relation::Artwork.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::exhibition_artwork::Relation::Exhibition.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::{ExhibitionStatus, Model};

    fn exhibition(start: (i32, u32, u32), end: (i32, u32, u32)) -> Model {
        Model {
            id: Uuid::new_v4(),
            venue_id: None,
            name: "Retrospective".into(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            poster_ref: None,
        }
    }

    #[test]
    fn status_is_derived_from_dates() {
        let show = exhibition((2026, 6, 1), (2026, 6, 30));

        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(show.status_on(day(2026, 5, 31)), ExhibitionStatus::Upcoming);
        assert_eq!(show.status_on(day(2026, 6, 1)), ExhibitionStatus::Ongoing);
        assert_eq!(show.status_on(day(2026, 6, 30)), ExhibitionStatus::Ongoing);
        assert_eq!(show.status_on(day(2026, 7, 1)), ExhibitionStatus::Ended);
    }
}
