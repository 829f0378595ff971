//! One-shot bulk loader for the seed dataset.
//!
//! Reads `venues.json` and `events.json` from the configured seed directory,
//! clears the venue and event tables, and re-imports everything in a single
//! transaction. Events referencing a venue that is not part of the dataset
//! are skipped and counted rather than failing the whole import.

use std::path::Path;

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::{
    model::api::ImportSummaryDto,
    server::{
        data::{event::EventRepository, venue::VenueRepository},
        error::AppError,
        model::{
            event::{CreateEventParams, EventDate},
            venue::CreateVenueParams,
        },
    },
};

/// One venue record of the seed dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedVenue {
    pub venue_id: String,
    pub venue_name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// One event record of the seed dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEvent {
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub presenter: Option<String>,
    pub price: Option<String>,
    pub venue_id: String,
    #[serde(default)]
    pub dates: Vec<SeedEventDate>,
}

/// One scheduled {date, time} entry of a seed event.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEventDate {
    pub date: String,
    #[serde(default)]
    pub time: String,
}

/// Counts reported after a completed import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    /// Venues inserted.
    pub venues_count: usize,
    /// Events inserted.
    pub events_count: usize,
    /// Events skipped because their venue was not in the dataset.
    pub skipped_events: usize,
}

impl ImportSummary {
    /// Converts the summary to its response DTO.
    pub fn into_dto(self) -> ImportSummaryDto {
        ImportSummaryDto {
            message: "Data initialized successfully".to_string(),
            venues_count: self.venues_count,
            events_count: self.events_count,
            skipped_events: self.skipped_events,
        }
    }
}

/// Service running the one-shot seed import.
///
/// This struct holds a reference to the database connection.
pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    /// Creates a new ImportService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ImportService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the import from the given seed directory.
    ///
    /// Existing venues and events are removed first; comments, favorites, and
    /// event dates attached to them go with them through the cascades. The
    /// whole import commits atomically.
    ///
    /// # Arguments
    /// - `seed_dir` - Directory containing `venues.json` and `events.json`
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Inserted and skipped counts
    /// - `Err(AppError::IoErr)` - Seed file could not be read
    /// - `Err(AppError::JsonErr)` - Seed file could not be parsed
    /// - `Err(AppError)` - Database error
    pub async fn run(&self, seed_dir: &Path) -> Result<ImportSummary, AppError> {
        let venues_raw = tokio::fs::read_to_string(seed_dir.join("venues.json")).await?;
        let seed_venues: Vec<SeedVenue> = serde_json::from_str(&venues_raw)?;

        let events_raw = tokio::fs::read_to_string(seed_dir.join("events.json")).await?;
        let seed_events: Vec<SeedEvent> = serde_json::from_str(&events_raw)?;

        let txn = self.db.begin().await?;

        let venue_repo = VenueRepository::new(&txn);
        let event_repo = EventRepository::new(&txn);

        event_repo.delete_all().await?;
        venue_repo.delete_all().await?;

        // Map seed business keys to the freshly assigned database ids.
        let mut venue_ids = std::collections::HashMap::new();
        let mut venues_count = 0;
        for seed in seed_venues {
            let address = seed.address.unwrap_or_else(|| seed.venue_name.clone());
            let venue = venue_repo
                .create(CreateVenueParams {
                    venue_id: seed.venue_id.clone(),
                    venue_name: seed.venue_name,
                    latitude: seed.latitude,
                    longitude: seed.longitude,
                    address,
                    description: seed.description,
                })
                .await?;
            venue_ids.insert(seed.venue_id, venue.id);
            venues_count += 1;
        }

        let mut events_count = 0;
        let mut skipped_events = 0;
        for seed in seed_events {
            let Some(&venue_id) = venue_ids.get(&seed.venue_id) else {
                tracing::warn!(
                    "Skipping event {} due to missing venue {}",
                    seed.event_id,
                    seed.venue_id
                );
                skipped_events += 1;
                continue;
            };

            event_repo
                .create(CreateEventParams {
                    event_id: seed.event_id,
                    title: seed.title,
                    description: seed.description,
                    presenter: seed.presenter,
                    price: seed.price,
                    venue_id,
                    dates: seed
                        .dates
                        .into_iter()
                        .map(|d| EventDate {
                            date: d.date,
                            time: d.time,
                        })
                        .collect(),
                })
                .await?;
            events_count += 1;
        }

        txn.commit().await?;

        tracing::info!(
            "Imported {} venues and {} events ({} skipped)",
            venues_count,
            events_count,
            skipped_events
        );

        Ok(ImportSummary {
            venues_count,
            events_count,
            skipped_events,
        })
    }
}
