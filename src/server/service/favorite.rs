//! Favorites: a per-user set of bookmarked venues.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, favorite::FavoriteRepository, venue::VenueRepository},
    error::AppError,
    model::{favorite::FavoriteParams, venue::VenueWithComments},
};

/// Service providing the favorites set operations.
///
/// This struct holds a reference to the database connection and provides
/// methods for listing, adding, and removing favorites. Listings expand each
/// favorite to the full venue record with its comments.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorited venues, expanded to full venue records.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    ///
    /// # Returns
    /// - `Ok(Vec<VenueWithComments>)` - The favorited venues with comments
    /// - `Err(AppError)` - Database error
    pub async fn list(&self, user_id: i32) -> Result<Vec<VenueWithComments>, AppError> {
        let venues = FavoriteRepository::new(self.db)
            .venues_for_user(user_id)
            .await?;

        let comment_repo = CommentRepository::new(self.db);
        let mut result = Vec::with_capacity(venues.len());
        for venue in venues {
            let comments = comment_repo.get_by_venue(venue.id).await?;
            result.push(VenueWithComments { venue, comments });
        }

        Ok(result)
    }

    /// Adds a venue to a user's favorites and returns the updated list.
    ///
    /// Adding an already-favorited venue is a no-op that still returns the
    /// list; the set never holds duplicates.
    ///
    /// # Arguments
    /// - `params` - User and venue ids
    ///
    /// # Returns
    /// - `Ok(Vec<VenueWithComments>)` - The updated favorite venue list
    /// - `Err(AppError::NotFound)` - Venue does not exist
    /// - `Err(AppError)` - Database error
    pub async fn add(&self, params: FavoriteParams) -> Result<Vec<VenueWithComments>, AppError> {
        VenueRepository::new(self.db)
            .find_by_id(params.venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        FavoriteRepository::new(self.db)
            .add(params.user_id, params.venue_id)
            .await?;

        self.list(params.user_id).await
    }

    /// Removes a venue from a user's favorites and returns the updated list.
    ///
    /// Removing a venue that was never favorited is a no-op returning the
    /// unchanged list.
    ///
    /// # Arguments
    /// - `params` - User and venue ids
    ///
    /// # Returns
    /// - `Ok(Vec<VenueWithComments>)` - The updated favorite venue list
    /// - `Err(AppError)` - Database error
    pub async fn remove(&self, params: FavoriteParams) -> Result<Vec<VenueWithComments>, AppError> {
        FavoriteRepository::new(self.db)
            .remove(params.user_id, params.venue_id)
            .await?;

        self.list(params.user_id).await
    }
}
