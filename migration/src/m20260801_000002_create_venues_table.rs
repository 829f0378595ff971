use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(pk_auto(Venues::Id))
                    .col(string_uniq(Venues::VenueId))
                    .col(string(Venues::VenueName))
                    .col(double(Venues::Latitude))
                    .col(double(Venues::Longitude))
                    .col(string(Venues::Address))
                    .col(text_null(Venues::Description))
                    .col(double(Venues::AverageRating).default(0.0))
                    .col(integer(Venues::TotalComments).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venues {
    Table,
    Id,
    VenueId,
    VenueName,
    Latitude,
    Longitude,
    Address,
    Description,
    AverageRating,
    TotalComments,
}
