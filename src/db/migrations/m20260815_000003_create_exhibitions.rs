use sea_orm::{
    DbErr, DeriveIden, DeriveMigrationName,
    prelude::Expr,
    sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table},
};
use sea_orm_migration::{MigrationTrait, SchemaManager, async_trait::async_trait};

use super::{
    m20260815_000001_create_users::Users, m20260815_000002_create_catalog::Artworks,
};

#[derive(DeriveIden)]
pub enum Venues {
    Table,
    Id,
    Name,
    Address,
    City,
    Country,
}

#[derive(DeriveIden)]
pub enum Exhibitions {
    Table,
    Id,
    VenueId,
    Name,
    Description,
    StartDate,
    EndDate,
    PosterRef,
}

#[derive(DeriveIden)]
pub enum ExhibitionArtworks {
    Table,
    ExhibitionId,
    ArtworkId,
}

#[derive(DeriveIden)]
pub enum Tickets {
    Table,
    Id,
    ExhibitionId,
    Kind,
    PriceCents,
    Stock,
    StockRemaining,
}

#[derive(DeriveIden)]
pub enum TicketPurchases {
    Table,
    Id,
    TicketId,
    BuyerId,
    Quantity,
    TotalCents,
    ConfirmationCode,
    PurchasedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Venues::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Venues::Name).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Venues::Address)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Venues::City).string_len(100).not_null())
                    .col(ColumnDef::new(Venues::Country).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Exhibitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exhibitions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exhibitions::VenueId).uuid())
                    .col(
                        ColumnDef::new(Exhibitions::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Exhibitions::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Exhibitions::StartDate).date().not_null())
                    .col(ColumnDef::new(Exhibitions::EndDate).date().not_null())
                    .col(ColumnDef::new(Exhibitions::PosterRef).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exhibitions_venue")
                            .from(Exhibitions::Table, Exhibitions::VenueId)
                            .to(Venues::Table, Venues::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exhibitions_venue_id")
                    .table(Exhibitions::Table)
                    .col(Exhibitions::VenueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExhibitionArtworks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExhibitionArtworks::ExhibitionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExhibitionArtworks::ArtworkId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ExhibitionArtworks::ExhibitionId)
                            .col(ExhibitionArtworks::ArtworkId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exhibition_artworks_exhibition")
                            .from(ExhibitionArtworks::Table, ExhibitionArtworks::ExhibitionId)
                            .to(Exhibitions::Table, Exhibitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exhibition_artworks_artwork")
                            .from(ExhibitionArtworks::Table, ExhibitionArtworks::ArtworkId)
                            .to(Artworks::Table, Artworks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tickets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tickets::ExhibitionId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::Kind).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Tickets::PriceCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Tickets::Stock).integer().not_null())
                    .col(
                        ColumnDef::new(Tickets::StockRemaining)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_exhibition")
                            .from(Tickets::Table, Tickets::ExhibitionId)
                            .to(Exhibitions::Table, Exhibitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_exhibition_id")
                    .table(Tickets::Table)
                    .col(Tickets::ExhibitionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TicketPurchases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketPurchases::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TicketPurchases::TicketId).uuid().not_null())
                    .col(ColumnDef::new(TicketPurchases::BuyerId).uuid().not_null())
                    .col(
                        ColumnDef::new(TicketPurchases::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TicketPurchases::TotalCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TicketPurchases::ConfirmationCode)
                            .string_len(12)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TicketPurchases::PurchasedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_purchases_ticket")
                            .from(TicketPurchases::Table, TicketPurchases::TicketId)
                            .to(Tickets::Table, Tickets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_purchases_buyer")
                            .from(TicketPurchases::Table, TicketPurchases::BuyerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketPurchases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExhibitionArtworks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exhibitions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}
