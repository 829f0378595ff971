//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a comment with its user and venue dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as comment author)
/// 2. Venue (as comment target)
/// 3. Comment
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, venue, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::venue::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let venue = crate::factory::venue::create_venue(db).await?;
    let comment = crate::factory::comment::create_comment(db, &user, venue.id).await?;

    Ok((user, venue, comment))
}

/// Creates an event with its venue dependency and one date entry.
///
/// This creates a venue, then an event held at that venue, then a single
/// date entry for the event. Useful when testing event queries that join
/// venues and dates.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((venue, event, date))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::venue::Model,
        entity::event::Model,
        entity::event_date::Model,
    ),
    DbErr,
> {
    let venue = crate::factory::venue::create_venue(db).await?;
    let event = crate::factory::event::create_event(db, venue.id).await?;
    let date = crate::factory::event_date::create_event_date(db, event.id).await?;

    Ok((venue, event, date))
}
