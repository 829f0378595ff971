//! Favorite factory for creating test favorite entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite linking a user to a venue.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Database id of the user
/// - `venue_id` - Database id of the venue
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    venue_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        venue_id: ActiveValue::Set(venue_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
