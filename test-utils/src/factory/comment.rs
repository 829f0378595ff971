//! Comment factory for creating test comment entities.
//!
//! This module provides factory methods for creating comment entities with
//! sensible defaults. The author's username snapshot is taken from the user
//! entity passed in, matching how the application writes comments.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// Provides a builder pattern for creating comment entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let comment = CommentFactory::new(&db, &user, venue.id)
///     .body("Great venue")
///     .rating(5)
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    venue_id: i32,
    username: String,
    body: String,
    rating: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - username: snapshot of the passed user's username
    /// - body: `"Comment {id}"` where id is auto-incremented
    /// - rating: `3`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user` - Author of the comment (id and username snapshot)
    /// - `venue_id` - Database id of the venue being commented on
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user: &entity::user::Model, venue_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: user.id,
            venue_id,
            username: user.username.clone(),
            body: format!("Comment {}", id),
            rating: 3,
            created_at: Utc::now(),
        }
    }

    /// Sets the comment text.
    ///
    /// # Arguments
    /// - `body` - Comment text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the rating.
    ///
    /// # Arguments
    /// - `rating` - Rating value, 1 to 5
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the creation timestamp.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp to store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            venue_id: ActiveValue::Set(self.venue_id),
            username: ActiveValue::Set(self.username),
            body: ActiveValue::Set(self.body),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
///
/// Shorthand for `CommentFactory::new(db, user, venue_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - Author of the comment
/// - `venue_id` - Database id of the venue
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    venue_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, user, venue_id).build().await
}

/// Creates a comment with a specific rating.
///
/// Shorthand for `CommentFactory::new(db, user, venue_id).rating(rating).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - Author of the comment
/// - `venue_id` - Database id of the venue
/// - `rating` - Rating value, 1 to 5
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment_with_rating(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    venue_id: i32,
    rating: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, user, venue_id)
        .rating(rating)
        .build()
        .await
}
