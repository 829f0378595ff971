//! Venue data repository for database operations.
//!
//! This module provides the `VenueRepository` for managing venue records in the database.
//! It handles venue creation, lookup by database id and business key, listing, partial
//! updates, deletion, and the derived rating aggregate write used by the comment paths.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::venue::{CreateVenueParams, UpdateVenueParams, Venue};

/// Repository providing database operations for venue management.
///
/// This struct holds a reference to a database connection (or transaction) and
/// provides methods for creating, reading, updating, and deleting venue records.
pub struct VenueRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    /// Creates a new VenueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `VenueRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new venue record with zeroed rating aggregates.
    ///
    /// # Arguments
    /// - `params` - Venue business key, name, coordinates, address, and description
    ///
    /// # Returns
    /// - `Ok(Venue)` - The created venue
    /// - `Err(DbErr)` - Database error during insert (including unique key conflicts)
    pub async fn create(&self, params: CreateVenueParams) -> Result<Venue, DbErr> {
        let entity = entity::venue::ActiveModel {
            venue_id: ActiveValue::Set(params.venue_id),
            venue_name: ActiveValue::Set(params.venue_name),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            address: ActiveValue::Set(params.address),
            description: ActiveValue::Set(params.description),
            average_rating: ActiveValue::Set(0.0),
            total_comments: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Venue::from_entity(entity))
    }

    /// Finds a venue by its database id.
    ///
    /// # Arguments
    /// - `id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - Venue found with full data
    /// - `Ok(None)` - No venue with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Venue>, DbErr> {
        let entity = entity::prelude::Venue::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Venue::from_entity))
    }

    /// Finds a venue by its unique business key.
    ///
    /// Used by event creation to resolve the venue a request references and by
    /// venue creation for conflict detection.
    ///
    /// # Arguments
    /// - `venue_id` - Venue business key
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - Venue found with full data
    /// - `Ok(None)` - No venue with that business key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_venue_id(&self, venue_id: &str) -> Result<Option<Venue>, DbErr> {
        let entity = entity::prelude::Venue::find()
            .filter(entity::venue::Column::VenueId.eq(venue_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Venue::from_entity))
    }

    /// Gets all venues ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Venue>)` - All venues (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Venue>, DbErr> {
        let entities = entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::VenueName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Venue::from_entity).collect())
    }

    /// Applies a partial update to a venue's descriptive fields.
    ///
    /// Only the fields present in the params are written; the derived rating
    /// aggregates are not touchable through this method.
    ///
    /// # Arguments
    /// - `id` - Database id of the venue to update
    /// - `params` - Optional replacement values for the descriptive fields
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - The updated venue
    /// - `Ok(None)` - No venue with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateVenueParams,
    ) -> Result<Option<Venue>, DbErr> {
        let Some(model) = entity::prelude::Venue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::venue::ActiveModel = model.into();

        if let Some(venue_name) = params.venue_name {
            active.venue_name = ActiveValue::Set(venue_name);
        }
        if let Some(latitude) = params.latitude {
            active.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.longitude {
            active.longitude = ActiveValue::Set(longitude);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Venue::from_entity(entity)))
    }

    /// Deletes a venue by its database id.
    ///
    /// Comments, favorites, and events referencing the venue are removed by the
    /// cascading foreign keys.
    ///
    /// # Arguments
    /// - `id` - Database id of the venue to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Venue existed and was deleted
    /// - `Ok(false)` - No venue with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Venue::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Writes the derived rating aggregates for a venue.
    ///
    /// Called by the comment write paths after recomputing the average from the
    /// comment set, inside the same transaction as the comment write, so readers
    /// never observe a stale aggregate alongside a changed comment list.
    ///
    /// # Arguments
    /// - `id` - Database id of the venue
    /// - `average_rating` - Mean of all comment ratings rounded to one decimal
    /// - `total_comments` - Number of comments on the venue
    ///
    /// # Returns
    /// - `Ok(())` - Aggregates written (or no matching venue found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_rating_stats(
        &self,
        id: i32,
        average_rating: f64,
        total_comments: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::Venue::update_many()
            .filter(entity::venue::Column::Id.eq(id))
            .col_expr(
                entity::venue::Column::AverageRating,
                sea_orm::sea_query::Expr::value(average_rating),
            )
            .col_expr(
                entity::venue::Column::TotalComments,
                sea_orm::sea_query::Expr::value(total_comments),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every venue.
    ///
    /// Used by the bulk loader before re-importing the seed dataset. Comments,
    /// favorites, and events cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of venues removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Venue::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
