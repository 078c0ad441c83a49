use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(indexed)]
    pub recipient_id: Uuid,

    pub title: String,

    pub message: String,

    pub kind: NotificationKind,

    pub status: NotificationStatus,

    #[sea_orm(nullable)]
    pub exhibition_id: Option<Uuid>,

    pub created_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub read_at: Option<DateTimeUtc>,
}

#[derive(Clone, Copy, Debug, Default, EnumIter, DeriveActiveEnum, PartialEq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    #[sea_orm(string_value = "info")]
    Info,

    #[sea_orm(string_value = "order")]
    Order,

    #[sea_orm(string_value = "exhibition")]
    Exhibition,

    #[sea_orm(string_value = "system")]
    System,
}

#[derive(Clone, Copy, Debug, Default, EnumIter, DeriveActiveEnum, PartialEq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    #[default]
    #[sea_orm(string_value = "unread")]
    Unread,

    #[sea_orm(string_value = "read")]
    Read,
}

impl Model {
    /// Returns the read timestamp to persist, or None when the notification
    /// was already read (the first read time is kept).
    pub fn first_read_at(&self, now: DateTimeUtc) -> Option<DateTimeUtc> {
        match self.status {
            NotificationStatus::Unread => Some(now),
            NotificationStatus::Read => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecipientId",
        to = "super::user::Column::Id"
    )]
    Recipient,

    #[sea_orm(
        belongs_to = "super::exhibition::Entity",
        from = "Column::ExhibitionId",
        to = "super::exhibition::Column::Id"
    )]
    Exhibition,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipient.def()
    }
}

impl Related<super::exhibition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exhibition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::{Model, NotificationKind, NotificationStatus};

    #[test]
    fn read_time_is_set_exactly_once() {
        let now = Utc::now();
        let mut notification = Model {
            id: Uuid::new_v4(),
            recipient_id: Uuid::new_v4(),
            title: "Order shipped".into(),
            message: String::new(),
            kind: NotificationKind::Order,
            status: NotificationStatus::Unread,
            exhibition_id: None,
            created_at: now,
            read_at: None,
        };

        assert_eq!(notification.first_read_at(now), Some(now));

        notification.status = NotificationStatus::Read;
        notification.read_at = Some(now);

        let later = now + Duration::hours(1);
        assert_eq!(notification.first_read_at(later), None);
    }
}
