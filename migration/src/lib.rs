pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users_table;
mod m20260801_000002_create_venues_table;
mod m20260801_000003_create_comments_table;
mod m20260801_000004_create_favorites_table;
mod m20260801_000005_create_events_table;
mod m20260801_000006_create_event_dates_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users_table::Migration),
            Box::new(m20260801_000002_create_venues_table::Migration),
            Box::new(m20260801_000003_create_comments_table::Migration),
            Box::new(m20260801_000004_create_favorites_table::Migration),
            Box::new(m20260801_000005_create_events_table::Migration),
            Box::new(m20260801_000006_create_event_dates_table::Migration),
        ]
    }
}
