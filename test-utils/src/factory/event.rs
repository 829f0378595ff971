//! Event factory for creating test event entities.
//!
//! This module provides factory methods for creating event entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Provides a builder pattern for creating event entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, venue.id)
///     .event_id(42)
///     .title("Evening Concert")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i64,
    title: String,
    description: Option<String>,
    presenter: Option<String>,
    price: Option<String>,
    venue_id: i32,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - event_id: auto-incremented counter value
    /// - title: `"Event {id}"`
    /// - description/presenter/price: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `venue_id` - Database id of the hosting venue
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, venue_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id: id as i64,
            title: format!("Event {}", id),
            description: None,
            presenter: None,
            price: None,
            venue_id,
        }
    }

    /// Sets the business key for the event.
    ///
    /// # Arguments
    /// - `event_id` - Unique event business key
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn event_id(mut self, event_id: i64) -> Self {
        self.event_id = event_id;
        self
    }

    /// Sets the title for the event.
    ///
    /// # Arguments
    /// - `title` - Event title
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the event.
    ///
    /// # Arguments
    /// - `description` - Free-text description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the presenter for the event.
    ///
    /// # Arguments
    /// - `presenter` - Presenting organisation or person
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn presenter(mut self, presenter: impl Into<String>) -> Self {
        self.presenter = Some(presenter.into());
        self
    }

    /// Sets the price text for the event.
    ///
    /// # Arguments
    /// - `price` - Price description as displayed
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            presenter: ActiveValue::Set(self.presenter),
            price: ActiveValue::Set(self.price),
            venue_id: ActiveValue::Set(self.venue_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
///
/// Shorthand for `EventFactory::new(db, venue_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `venue_id` - Database id of the hosting venue
///
/// # Returns
/// - `Ok(entity::event::Model)` - Created event entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event(
    db: &DatabaseConnection,
    venue_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, venue_id).build().await
}

/// Creates an event with a specific business key.
///
/// Shorthand for `EventFactory::new(db, venue_id).event_id(event_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `venue_id` - Database id of the hosting venue
/// - `event_id` - Unique event business key
///
/// # Returns
/// - `Ok(entity::event::Model)` - Created event entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event_with_id(
    db: &DatabaseConnection,
    venue_id: i32,
    event_id: i64,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, venue_id).event_id(event_id).build().await
}
