//! Favorite data repository for database operations.
//!
//! This module provides the `FavoriteRepository` for managing the user-to-venue
//! bookmark relation. Adding is idempotent (an existing pair is left untouched)
//! and removing an absent pair is a no-op, matching the set semantics of the
//! favorites API.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::venue::Venue;

/// Repository providing database operations for favorite management.
///
/// This struct holds a reference to a database connection (or transaction) and
/// provides methods for adding, removing, and listing favorites.
pub struct FavoriteRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a user has favorited a venue.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(true)` - The pair exists
    /// - `Ok(false)` - The pair does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, user_id: i32, venue_id: i32) -> Result<bool, DbErr> {
        let favorite = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VenueId.eq(venue_id))
            .one(self.db)
            .await?;

        Ok(favorite.is_some())
    }

    /// Adds a venue to a user's favorites if not already present.
    ///
    /// A duplicate add leaves the set with exactly one entry for the venue.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(())` - Pair present after the call, whether inserted or pre-existing
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add(&self, user_id: i32, venue_id: i32) -> Result<(), DbErr> {
        if self.exists(user_id, venue_id).await? {
            return Ok(());
        }

        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            venue_id: ActiveValue::Set(venue_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a venue from a user's favorites.
    ///
    /// Removing a pair that is not present is a no-op.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(true)` - The pair existed and was removed
    /// - `Ok(false)` - The pair was not present
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, user_id: i32, venue_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VenueId.eq(venue_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the venues a user has favorited, expanded to full venue records.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    ///
    /// # Returns
    /// - `Ok(Vec<Venue>)` - The favorited venues (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn venues_for_user(&self, user_id: i32) -> Result<Vec<Venue>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Venue)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, venue)| venue.map(Venue::from_entity))
            .collect())
    }
}
