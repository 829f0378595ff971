//! Venue CRUD orchestration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, venue::VenueRepository},
    error::AppError,
    model::venue::{CreateVenueParams, UpdateVenueParams, Venue, VenueWithComments},
};

/// Service providing business logic for venue management.
///
/// This struct holds a reference to the database connection and provides
/// methods for venue queries and admin-side mutations.
pub struct VenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueService<'a> {
    /// Creates a new VenueService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VenueService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all venues with their comments.
    ///
    /// # Returns
    /// - `Ok(Vec<VenueWithComments>)` - All venues, each with its comments
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self) -> Result<Vec<VenueWithComments>, AppError> {
        let venues = VenueRepository::new(self.db).get_all().await?;

        let comment_repo = CommentRepository::new(self.db);
        let mut result = Vec::with_capacity(venues.len());
        for venue in venues {
            let comments = comment_repo.get_by_venue(venue.id).await?;
            result.push(VenueWithComments { venue, comments });
        }

        Ok(result)
    }

    /// Gets one venue with its comments.
    ///
    /// # Arguments
    /// - `id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(VenueWithComments)` - The venue with its comments
    /// - `Err(AppError::NotFound)` - No venue with that id
    /// - `Err(AppError)` - Database error
    pub async fn get(&self, id: i32) -> Result<VenueWithComments, AppError> {
        let venue = VenueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        let comments = CommentRepository::new(self.db).get_by_venue(venue.id).await?;

        Ok(VenueWithComments { venue, comments })
    }

    /// Creates a venue.
    ///
    /// The business key must be unused.
    ///
    /// # Arguments
    /// - `params` - Venue business key, name, coordinates, address, description
    ///
    /// # Returns
    /// - `Ok(Venue)` - The created venue with zeroed aggregates
    /// - `Err(AppError::BadRequest)` - Business key already in use
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, params: CreateVenueParams) -> Result<Venue, AppError> {
        let venue_repo = VenueRepository::new(self.db);

        if venue_repo.find_by_venue_id(&params.venue_id).await?.is_some() {
            return Err(AppError::BadRequest("Venue already exists".to_string()));
        }

        let venue = venue_repo.create(params).await?;

        Ok(venue)
    }

    /// Applies a partial update to a venue's descriptive fields.
    ///
    /// # Arguments
    /// - `id` - Database id of the venue
    /// - `params` - Optional replacement values
    ///
    /// # Returns
    /// - `Ok(Venue)` - The updated venue
    /// - `Err(AppError::NotFound)` - No venue with that id
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: i32, params: UpdateVenueParams) -> Result<Venue, AppError> {
        let venue = VenueRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        Ok(venue)
    }

    /// Deletes a venue.
    ///
    /// Comments, favorites, and events at the venue are removed with it.
    ///
    /// # Arguments
    /// - `id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(())` - Venue deleted
    /// - `Err(AppError::NotFound)` - No venue with that id
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = VenueRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Venue not found".to_string()));
        }

        Ok(())
    }
}
