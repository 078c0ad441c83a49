use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exhibition_artworks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub exhibition_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub artwork_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exhibition::Entity",
        from = "Column::ExhibitionId",
        to = "super::exhibition::Column::Id"
    )]
    Exhibition,

    #[sea_orm(
        belongs_to = "super::artwork::Entity",
        from = "Column::ArtworkId",
        to = "super::artwork::Column::Id"
    )]
    Artwork,
}

impl ActiveModelBehavior for ActiveModel {}
