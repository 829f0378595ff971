//! Venue factory for creating test venue entities.
//!
//! This module provides factory methods for creating venue entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test venues with customizable fields.
///
/// Provides a builder pattern for creating venue entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::venue::VenueFactory;
///
/// let venue = VenueFactory::new(&db)
///     .venue_id("V100")
///     .venue_name("City Hall")
///     .build()
///     .await?;
/// ```
pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    venue_id: String,
    venue_name: String,
    latitude: f64,
    longitude: f64,
    address: String,
    description: Option<String>,
    average_rating: f64,
    total_comments: i32,
}

impl<'a> VenueFactory<'a> {
    /// Creates a new VenueFactory with default values.
    ///
    /// Defaults:
    /// - venue_id: `"venue_{id}"` where id is auto-incremented
    /// - venue_name: `"Venue {id}"`
    /// - latitude/longitude: `22.28` / `114.15`
    /// - address: `"1 Test Street"`
    /// - description: `None`
    /// - average_rating: `0.0`, total_comments: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `VenueFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            venue_id: format!("venue_{}", id),
            venue_name: format!("Venue {}", id),
            latitude: 22.28,
            longitude: 114.15,
            address: "1 Test Street".to_string(),
            description: None,
            average_rating: 0.0,
            total_comments: 0,
        }
    }

    /// Sets the business key for the venue.
    ///
    /// # Arguments
    /// - `venue_id` - Unique venue business key
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn venue_id(mut self, venue_id: impl Into<String>) -> Self {
        self.venue_id = venue_id.into();
        self
    }

    /// Sets the display name for the venue.
    ///
    /// # Arguments
    /// - `venue_name` - Venue display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn venue_name(mut self, venue_name: impl Into<String>) -> Self {
        self.venue_name = venue_name.into();
        self
    }

    /// Sets the geocoordinates for the venue.
    ///
    /// # Arguments
    /// - `latitude` - Latitude in degrees
    /// - `longitude` - Longitude in degrees
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the address for the venue.
    ///
    /// # Arguments
    /// - `address` - Street address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the description for the venue.
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

    /// Sets the stored rating aggregates for the venue.
    ///
    /// Tests of the recompute path use this to seed deliberately stale values.
    ///
    /// # Arguments
    /// - `average_rating` - Stored average rating
    /// - `total_comments` - Stored comment count
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rating_stats(mut self, average_rating: f64, total_comments: i32) -> Self {
        self.average_rating = average_rating;
        self.total_comments = total_comments;
        self
    }

    /// Builds and inserts the venue entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::venue::Model)` - Created venue entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            venue_id: ActiveValue::Set(self.venue_id),
            venue_name: ActiveValue::Set(self.venue_name),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            address: ActiveValue::Set(self.address),
            description: ActiveValue::Set(self.description),
            average_rating: ActiveValue::Set(self.average_rating),
            total_comments: ActiveValue::Set(self.total_comments),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a venue with default values.
///
/// Shorthand for `VenueFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::venue::Model)` - Created venue entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_venue(db: &DatabaseConnection) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db).build().await
}

/// Creates a venue with a specific business key.
///
/// Shorthand for `VenueFactory::new(db).venue_id(venue_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `venue_id` - Unique venue business key
///
/// # Returns
/// - `Ok(entity::venue::Model)` - Created venue entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_venue_with_id(
    db: &DatabaseConnection,
    venue_id: impl Into<String>,
) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db).venue_id(venue_id).build().await
}
