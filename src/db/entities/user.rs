use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique, indexed)]
    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    pub role: Role,

    pub registered_at: DateTimeUtc,
}

/// Role is fixed at account creation; there is no self-promotion path.
#[derive(Clone, Copy, Debug, Default, EnumIter, DeriveActiveEnum, PartialEq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "visitor")]
    Visitor,

    #[sea_orm(string_value = "artist")]
    Artist,

    #[sea_orm(string_value = "curator")]
    Curator,

    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Role {
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Curator | Role::Admin)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::artist::Entity")]
    Artist,

    #[sea_orm(has_many = "super::order::Entity")]
    Orders,

    #[sea_orm(has_many = "super::notification::Entity")]
    Notifications,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn staff_predicate_covers_curators_and_admins() {
        assert!(Role::Curator.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(!Role::Artist.is_staff());
        assert!(!Role::Visitor.is_staff());
    }
}
