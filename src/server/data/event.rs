//! Event data repository for database operations.
//!
//! This module provides the `EventRepository` for managing event records and their
//! scheduled date entries. Events carry a numeric business key assigned at creation;
//! lookups and deletion run against either the database id or the business key to
//! match the route surface.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event, EventDate, UpdateEventParams};

/// Repository providing database operations for event management.
///
/// This struct holds a reference to a database connection (or transaction) and
/// provides methods for creating, reading, updating, and deleting event records
/// together with their date entries.
pub struct EventRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Computes the next free event business key.
    ///
    /// Returns one more than the highest assigned key, or 1 when no events
    /// exist yet.
    ///
    /// # Returns
    /// - `Ok(i64)` - Next business key to assign
    /// - `Err(DbErr)` - Database error during query
    pub async fn next_event_id(&self) -> Result<i64, DbErr> {
        let newest = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::EventId)
            .one(self.db)
            .await?;

        Ok(newest.map(|e| e.event_id + 1).unwrap_or(1))
    }

    /// Creates an event together with its date entries.
    ///
    /// Callers run this inside a transaction so the event row and its dates
    /// land together.
    ///
    /// # Arguments
    /// - `params` - Business key, descriptive fields, venue id, and date entries
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with its dates (venue not joined)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            presenter: ActiveValue::Set(params.presenter),
            price: ActiveValue::Set(params.price),
            venue_id: ActiveValue::Set(params.venue_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut dates = Vec::with_capacity(params.dates.len());
        for date in params.dates {
            let entry = entity::event_date::ActiveModel {
                event_id: ActiveValue::Set(entity.id),
                date: ActiveValue::Set(date.date),
                time: ActiveValue::Set(date.time),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            dates.push(entry);
        }

        Ok(Event::from_entity(entity, None, dates))
    }

    /// Finds an event by its database id, with venue and dates attached.
    ///
    /// # Arguments
    /// - `id` - Database id of the event
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found with venue and dates
    /// - `Ok(None)` - No event with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some((event, venue)) = entity::prelude::Event::find_by_id(id)
            .find_also_related(entity::prelude::Venue)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let dates = self.dates_for_event(event.id).await?;

        Ok(Some(Event::from_entity(event, venue, dates)))
    }

    /// Finds an event by its business key, with venue and dates attached.
    ///
    /// # Arguments
    /// - `event_id` - Event business key
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found with venue and dates
    /// - `Ok(None)` - No event with that business key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_event_id(&self, event_id: i64) -> Result<Option<Event>, DbErr> {
        let Some((event, venue)) = entity::prelude::Event::find()
            .filter(entity::event::Column::EventId.eq(event_id))
            .find_also_related(entity::prelude::Venue)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let dates = self.dates_for_event(event.id).await?;

        Ok(Some(Event::from_entity(event, venue, dates)))
    }

    /// Gets all events ordered by business key, with venues and dates attached.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - All events (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let rows = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::EventId)
            .find_also_related(entity::prelude::Venue)
            .all(self.db)
            .await?;

        self.assemble(rows).await
    }

    /// Gets all events held at a venue, with venues and dates attached.
    ///
    /// # Arguments
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Events at that venue (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Event>, DbErr> {
        let rows = entity::prelude::Event::find()
            .filter(entity::event::Column::VenueId.eq(venue_id))
            .order_by_asc(entity::event::Column::EventId)
            .find_also_related(entity::prelude::Venue)
            .all(self.db)
            .await?;

        self.assemble(rows).await
    }

    /// Applies a partial update to an event.
    ///
    /// Only the fields present are written. A present `dates` list replaces the
    /// stored entries wholesale; callers run this inside a transaction when the
    /// replacement is involved.
    ///
    /// # Arguments
    /// - `id` - Database id of the event to update
    /// - `params` - Optional replacement values
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The updated event with venue and dates
    /// - `Ok(None)` - No event with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEventParams,
    ) -> Result<Option<Event>, DbErr> {
        let Some(model) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = model.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(presenter) = params.presenter {
            active.presenter = ActiveValue::Set(Some(presenter));
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(Some(price));
        }
        if let Some(venue_id) = params.venue_id {
            active.venue_id = ActiveValue::Set(venue_id);
        }

        let entity = active.update(self.db).await?;

        if let Some(dates) = params.dates {
            self.replace_dates(entity.id, dates).await?;
        }

        self.find_by_id(entity.id).await
    }

    /// Replaces every date entry of an event.
    ///
    /// # Arguments
    /// - `event_id` - Database id of the event
    /// - `dates` - New {date, time} entries
    ///
    /// # Returns
    /// - `Ok(())` - Entries replaced
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn replace_dates(&self, event_id: i32, dates: Vec<EventDate>) -> Result<(), DbErr> {
        entity::prelude::EventDate::delete_many()
            .filter(entity::event_date::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        for date in dates {
            entity::event_date::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                date: ActiveValue::Set(date.date),
                time: ActiveValue::Set(date.time),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Deletes an event by its business key.
    ///
    /// Date entries are removed by the cascading foreign key.
    ///
    /// # Arguments
    /// - `event_id` - Event business key
    ///
    /// # Returns
    /// - `Ok(true)` - Event existed and was deleted
    /// - `Ok(false)` - No event with that business key
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_event_id(&self, event_id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_many()
            .filter(entity::event::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every event.
    ///
    /// Used by the bulk loader before re-importing the seed dataset. Date
    /// entries cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of events removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Event::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Gets the date entries of one event, oldest first.
    async fn dates_for_event(&self, event_id: i32) -> Result<Vec<entity::event_date::Model>, DbErr> {
        entity::prelude::EventDate::find()
            .filter(entity::event_date::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_date::Column::Id)
            .all(self.db)
            .await
    }

    /// Attaches date entries to a batch of (event, venue) rows in two queries.
    async fn assemble(
        &self,
        rows: Vec<(entity::event::Model, Option<entity::venue::Model>)>,
    ) -> Result<Vec<Event>, DbErr> {
        let ids: Vec<i32> = rows.iter().map(|(event, _)| event.id).collect();

        let mut dates_by_event: HashMap<i32, Vec<entity::event_date::Model>> = HashMap::new();
        if !ids.is_empty() {
            let all_dates = entity::prelude::EventDate::find()
                .filter(entity::event_date::Column::EventId.is_in(ids))
                .order_by_asc(entity::event_date::Column::Id)
                .all(self.db)
                .await?;

            for date in all_dates {
                dates_by_event.entry(date.event_id).or_default().push(date);
            }
        }

        Ok(rows
            .into_iter()
            .map(|(event, venue)| {
                let dates = dates_by_event.remove(&event.id).unwrap_or_default();
                Event::from_entity(event, venue, dates)
            })
            .collect())
    }
}
