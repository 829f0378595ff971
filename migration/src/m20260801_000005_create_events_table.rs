use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_venues_table::Venues;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(big_integer_uniq(Events::EventId))
                    .col(string(Events::Title))
                    .col(text_null(Events::Description))
                    .col(string_null(Events::Presenter))
                    .col(string_null(Events::Price))
                    .col(integer(Events::VenueId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_venue_id")
                            .from(Events::Table, Events::VenueId)
                            .to(Venues::Table, Venues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    EventId,
    Title,
    Description,
    Presenter,
    Price,
    VenueId,
}
