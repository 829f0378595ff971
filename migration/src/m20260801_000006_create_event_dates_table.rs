use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000005_create_events_table::Events;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventDates::Table)
                    .if_not_exists()
                    .col(pk_auto(EventDates::Id))
                    .col(integer(EventDates::EventId))
                    .col(string(EventDates::Date))
                    .col(string(EventDates::Time).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_dates_event_id")
                            .from(EventDates::Table, EventDates::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventDates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventDates {
    Table,
    Id,
    EventId,
    Date,
    Time,
}
