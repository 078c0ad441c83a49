use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(indexed)]
    pub user_id: Uuid,

    #[sea_orm(nullable)]
    pub handled_by: Option<Uuid>,

    pub total_cents: i64,

    pub status: OrderStatus,

    pub shipping_address: String,

    pub created_at: DateTimeUtc,
}

#[derive(Clone, Copy, Debug, Default, EnumIter, DeriveActiveEnum, PartialEq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    #[sea_orm(string_value = "in_progress")]
    InProgress,

    #[sea_orm(string_value = "paid")]
    Paid,

    #[sea_orm(string_value = "cancelled")]
    Cancelled,

    #[sea_orm(string_value = "validated")]
    Validated,
}

impl OrderStatus {
    /// Forward-only: paid, cancelled and validated are terminal except for
    /// the staff-side paid -> validated step.
    pub fn is_valid_transition(&self, target: &OrderStatus) -> bool {
        use OrderStatus::*;

        matches!(
            (self, target),
            (InProgress, Paid) | (InProgress, Cancelled) | (Paid, Validated)
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(has_many = "super::order_line::Entity")]
    Lines,

    #[sea_orm(has_one = "super::payment::Entity")]
    Payment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lines.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::OrderStatus::*;

    #[test]
    fn status_only_moves_forward() {
        assert!(InProgress.is_valid_transition(&Paid));
        assert!(InProgress.is_valid_transition(&Cancelled));
        assert!(Paid.is_valid_transition(&Validated));

        assert!(!Paid.is_valid_transition(&InProgress));
        assert!(!Paid.is_valid_transition(&Cancelled));
        assert!(!Cancelled.is_valid_transition(&Paid));
        assert!(!Cancelled.is_valid_transition(&InProgress));
        assert!(!Validated.is_valid_transition(&Paid));
        assert!(!InProgress.is_valid_transition(&Validated));
    }
}
