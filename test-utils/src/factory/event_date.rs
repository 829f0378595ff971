//! Event date factory for creating test event date entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an event date entry with a default date.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Database id of the owning event
///
/// # Returns
/// - `Ok(entity::event_date::Model)` - Created event date entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event_date(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::event_date::Model, DbErr> {
    create_event_date_at(db, event_id, "2026-08-01", "20:00").await
}

/// Creates an event date entry with specific date and time strings.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Database id of the owning event
/// - `date` - Date string as displayed
/// - `time` - Time string as displayed
///
/// # Returns
/// - `Ok(entity::event_date::Model)` - Created event date entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event_date_at(
    db: &DatabaseConnection,
    event_id: i32,
    date: impl Into<String>,
    time: impl Into<String>,
) -> Result<entity::event_date::Model, DbErr> {
    entity::event_date::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        date: ActiveValue::Set(date.into()),
        time: ActiveValue::Set(time.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
