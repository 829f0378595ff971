//! Comment data repository for database operations.
//!
//! This module provides the `CommentRepository` for managing comment records. A comment
//! row is the single source of truth for both the user-side and venue-side comment
//! listings; the repository offers lookups along both axes plus the rating projection
//! the aggregate recompute consumes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::comment::{Comment, CommentWithVenue};

/// Repository providing database operations for comment management.
///
/// This struct holds a reference to a database connection (or transaction) and
/// provides methods for creating, reading, updating, and deleting comment records.
pub struct CommentRepository<'a, C> {
    db: &'a C,
}

/// Parameters for inserting a comment row.
///
/// Carries the author's username snapshot alongside the foreign keys; both
/// views of the comment are stamped with the same creation timestamp.
#[derive(Debug, Clone)]
pub struct InsertCommentParams {
    /// Database id of the author.
    pub user_id: i32,
    /// Database id of the venue.
    pub venue_id: i32,
    /// Author's username at creation time.
    pub username: String,
    /// Comment text.
    pub body: String,
    /// Rating, 1 to 5.
    pub rating: i32,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a comment row stamped with the current time.
    ///
    /// # Arguments
    /// - `params` - Author, venue, username snapshot, text, and rating
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: InsertCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            venue_id: ActiveValue::Set(params.venue_id),
            username: ActiveValue::Set(params.username),
            body: ActiveValue::Set(params.body),
            rating: ActiveValue::Set(params.rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Finds a comment by its database id.
    ///
    /// # Arguments
    /// - `id` - Database id of the comment
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found
    /// - `Ok(None)` - No comment with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets all comments written by a user, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the author
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - The user's comments (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets a user's comments together with each venue's name and address.
    ///
    /// This is the user-side listing shape: the join pulls the venue info the
    /// account comment routes attach to every entry.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the author
    ///
    /// # Returns
    /// - `Ok(Vec<CommentWithVenue>)` - The user's comments with venue info
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_with_venue(
        &self,
        user_id: i32,
    ) -> Result<Vec<CommentWithVenue>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .find_also_related(entity::prelude::Venue)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, venue)| {
                let (venue_name, address) = venue
                    .map(|v| (v.venue_name, v.address))
                    .unwrap_or_default();

                CommentWithVenue {
                    comment: Comment::from_entity(comment),
                    venue_name,
                    address,
                }
            })
            .collect())
    }

    /// Gets a user's comments for one venue, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the author
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - The user's comments on that venue (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_and_venue(
        &self,
        user_id: i32,
        venue_id: i32,
    ) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .filter(entity::comment::Column::VenueId.eq(venue_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets all comments on a venue, newest first.
    ///
    /// # Arguments
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - The venue's comments (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::VenueId.eq(venue_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets the bare ratings of every comment on a venue.
    ///
    /// This is the projection the aggregate recompute runs over; it is queried
    /// inside the same transaction as the comment write it follows.
    ///
    /// # Arguments
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ratings of all comments on the venue (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn ratings_for_venue(&self, venue_id: i32) -> Result<Vec<i32>, DbErr> {
        let ratings = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Rating)
            .filter(entity::comment::Column::VenueId.eq(venue_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ratings)
    }

    /// Applies a partial update to a comment's text and rating.
    ///
    /// Only the fields present are written. Ownership is checked by the service
    /// before this is called.
    ///
    /// # Arguments
    /// - `id` - Database id of the comment to update
    /// - `body` - Replacement text, if any
    /// - `rating` - Replacement rating, if any
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The updated comment
    /// - `Ok(None)` - No comment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        body: Option<String>,
        rating: Option<i32>,
    ) -> Result<Option<Comment>, DbErr> {
        let Some(model) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = model.into();

        if let Some(body) = body {
            active.body = ActiveValue::Set(body);
        }
        if let Some(rating) = rating {
            active.rating = ActiveValue::Set(rating);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Comment::from_entity(entity)))
    }

    /// Deletes a comment by its database id.
    ///
    /// # Arguments
    /// - `id` - Database id of the comment to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Comment existed and was deleted
    /// - `Ok(false)` - No comment with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
