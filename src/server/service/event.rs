//! Event CRUD orchestration.
//!
//! Events reference their venue by business key at the API boundary; the
//! service resolves the key to a database id before touching the event
//! tables. Business keys for new events are assigned sequentially from the
//! highest key present, starting at 1 on an empty table.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::event::{CreateEventDto, UpdateEventDto},
    server::{
        data::{event::EventRepository, venue::VenueRepository},
        error::AppError,
        model::event::{CreateEventParams, Event, EventDate, UpdateEventParams},
    },
};

/// Service providing business logic for event management.
///
/// This struct holds a reference to the database connection and provides
/// methods for event queries and admin-side mutations.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all events with venues and dates attached.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - All events ordered by business key
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        let events = EventRepository::new(self.db).get_all().await?;

        Ok(events)
    }

    /// Gets all events held at a venue.
    ///
    /// # Arguments
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Events at that venue (empty if none)
    /// - `Err(AppError)` - Database error
    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Event>, AppError> {
        let events = EventRepository::new(self.db).get_by_venue(venue_id).await?;

        Ok(events)
    }

    /// Gets one event by database id.
    ///
    /// # Arguments
    /// - `id` - Database id of the event
    ///
    /// # Returns
    /// - `Ok(Event)` - The event with venue and dates
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError)` - Database error
    pub async fn get(&self, id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(event)
    }

    /// Creates an event from the request body.
    ///
    /// Resolves the referenced venue by business key, assigns the next free
    /// event business key, and stores the event with its date entries in one
    /// transaction.
    ///
    /// # Arguments
    /// - `dto` - Create request body
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with venue and dates
    /// - `Err(AppError::BadRequest)` - Referenced venue does not exist
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, dto: CreateEventDto) -> Result<Event, AppError> {
        let venue = VenueRepository::new(self.db)
            .find_by_venue_id(&dto.venue_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Venue not found".to_string()))?;

        let txn = self.db.begin().await?;

        let event_repo = EventRepository::new(&txn);
        let event_id = event_repo.next_event_id().await?;

        let event = event_repo
            .create(CreateEventParams {
                event_id,
                title: dto.title,
                description: dto.description,
                presenter: dto.presenter,
                price: dto.price,
                venue_id: venue.id,
                dates: dto
                    .dates
                    .into_iter()
                    .map(|d| EventDate {
                        date: d.date,
                        time: d.time,
                    })
                    .collect(),
            })
            .await?;

        txn.commit().await?;

        self.get(event.id).await
    }

    /// Applies a partial update to an event from the request body.
    ///
    /// A present venue business key re-homes the event; a present date list
    /// replaces the stored entries wholesale.
    ///
    /// # Arguments
    /// - `id` - Database id of the event
    /// - `dto` - Update request body
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event with venue and dates
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::BadRequest)` - Referenced venue does not exist
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: i32, dto: UpdateEventDto) -> Result<Event, AppError> {
        let venue_id = match dto.venue_id {
            Some(key) => Some(
                VenueRepository::new(self.db)
                    .find_by_venue_id(&key)
                    .await?
                    .ok_or_else(|| AppError::BadRequest("Venue not found".to_string()))?
                    .id,
            ),
            None => None,
        };

        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn)
            .update(
                id,
                UpdateEventParams {
                    title: dto.title,
                    description: dto.description,
                    presenter: dto.presenter,
                    price: dto.price,
                    venue_id,
                    dates: dto.dates.map(|dates| {
                        dates
                            .into_iter()
                            .map(|d| EventDate {
                                date: d.date,
                                time: d.time,
                            })
                            .collect()
                    }),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        txn.commit().await?;

        Ok(event)
    }

    /// Deletes an event by its business key.
    ///
    /// # Arguments
    /// - `event_id` - Event business key
    ///
    /// # Returns
    /// - `Ok(())` - Event deleted
    /// - `Err(AppError::NotFound)` - No event with that business key
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, event_id: i64) -> Result<(), AppError> {
        let deleted = EventRepository::new(self.db)
            .delete_by_event_id(event_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }
}
