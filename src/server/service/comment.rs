//! Comment writes and venue rating aggregation.
//!
//! Every comment mutation runs inside a transaction that also recomputes the
//! venue's `average_rating` and `total_comments` from the comment set, so the
//! aggregates a reader observes always match the comments they were derived
//! from. The recompute is an explicit call on the write path, not a lifecycle
//! hook, and the averaging itself is a pure function tested in isolation.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        comment::{CommentRepository, InsertCommentParams},
        user::UserRepository,
        venue::VenueRepository,
    },
    error::AppError,
    model::{
        comment::{AddCommentParams, Comment, CommentWithVenue, DeleteCommentParams,
            UpdateCommentParams},
        venue::VenueWithComments,
    },
};

/// Computes the mean of a set of ratings rounded to one decimal place.
///
/// An empty set averages to 0.0, matching the stored default for a venue
/// that has never been commented on.
///
/// # Arguments
/// - `ratings` - Ratings to average, each 1 to 5
///
/// # Returns
/// - `f64` - Arithmetic mean rounded to one decimal, 0.0 for the empty slice
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: i32 = ratings.iter().sum();
    let mean = f64::from(sum) / ratings.len() as f64;

    (mean * 10.0).round() / 10.0
}

/// Service providing comment writes and the rating aggregate recompute.
///
/// This struct holds a reference to the database connection and provides
/// methods for adding, editing, deleting, and listing comments.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment and returns the author's updated comment list.
    ///
    /// The comment row serves both the user-side and venue-side listings; the
    /// venue's aggregates are recomputed before the transaction commits.
    ///
    /// # Arguments
    /// - `params` - Author, venue, text, and rating
    ///
    /// # Returns
    /// - `Ok(Vec<CommentWithVenue>)` - The author's comments with venue info
    /// - `Err(AppError::BadRequest)` - Rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - Venue or author does not exist
    /// - `Err(AppError)` - Database error
    pub async fn add(&self, params: AddCommentParams) -> Result<Vec<CommentWithVenue>, AppError> {
        validate_rating(params.rating)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .find_by_id(params.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let venue = VenueRepository::new(&txn)
            .find_by_id(params.venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        CommentRepository::new(&txn)
            .create(InsertCommentParams {
                user_id: user.id,
                venue_id: venue.id,
                username: user.username,
                body: params.comment,
                rating: params.rating,
            })
            .await?;

        recompute_venue_stats(&txn, venue.id).await?;

        txn.commit().await?;

        self.list_for_user(params.user_id).await
    }

    /// Adds a comment through the venue route and returns the updated venue.
    ///
    /// Same write as `add`; only the response shape differs, mirroring the
    /// venue-side append route of the API surface.
    ///
    /// # Arguments
    /// - `params` - Author, venue, text, and rating
    ///
    /// # Returns
    /// - `Ok(VenueWithComments)` - The venue with its updated comment list
    /// - `Err(AppError::BadRequest)` - Rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - Venue or author does not exist
    /// - `Err(AppError)` - Database error
    pub async fn add_to_venue(&self, params: AddCommentParams) -> Result<VenueWithComments, AppError> {
        let venue_id = params.venue_id;
        self.add(params).await?;

        let venue = VenueRepository::new(self.db)
            .find_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        let comments = CommentRepository::new(self.db).get_by_venue(venue_id).await?;

        Ok(VenueWithComments { venue, comments })
    }

    /// Edits a comment and returns the author's updated comment list.
    ///
    /// Only the author may edit; a comment owned by someone else behaves like
    /// a missing one. Absent fields are left unchanged.
    ///
    /// # Arguments
    /// - `params` - Comment id, author id, and optional replacement text/rating
    ///
    /// # Returns
    /// - `Ok(Vec<CommentWithVenue>)` - The author's comments with venue info
    /// - `Err(AppError::BadRequest)` - Replacement rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - No such comment owned by the author
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        params: UpdateCommentParams,
    ) -> Result<Vec<CommentWithVenue>, AppError> {
        if let Some(rating) = params.rating {
            validate_rating(rating)?;
        }

        let txn = self.db.begin().await?;

        let comment = find_owned_comment(&txn, params.comment_id, params.user_id).await?;

        CommentRepository::new(&txn)
            .update(comment.id, params.comment, params.rating)
            .await?;

        recompute_venue_stats(&txn, comment.venue_id).await?;

        txn.commit().await?;

        self.list_for_user(params.user_id).await
    }

    /// Deletes a comment.
    ///
    /// Only the author may delete; a comment owned by someone else behaves
    /// like a missing one.
    ///
    /// # Arguments
    /// - `params` - Comment id and author id
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted and aggregates recomputed
    /// - `Err(AppError::NotFound)` - No such comment owned by the author
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, params: DeleteCommentParams) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let comment = find_owned_comment(&txn, params.comment_id, params.user_id).await?;

        CommentRepository::new(&txn).delete(comment.id).await?;

        recompute_venue_stats(&txn, comment.venue_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Lists a user's comments with each venue's name and address attached.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the author
    ///
    /// # Returns
    /// - `Ok(Vec<CommentWithVenue>)` - The user's comments, newest first
    /// - `Err(AppError)` - Database error
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<CommentWithVenue>, AppError> {
        let comments = CommentRepository::new(self.db)
            .get_by_user_with_venue(user_id)
            .await?;

        Ok(comments)
    }

    /// Lists a user's comments for one venue.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the author
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - The user's comments on that venue, newest first
    /// - `Err(AppError)` - Database error
    pub async fn list_for_user_venue(
        &self,
        user_id: i32,
        venue_id: i32,
    ) -> Result<Vec<Comment>, AppError> {
        let comments = CommentRepository::new(self.db)
            .get_by_user_and_venue(user_id, venue_id)
            .await?;

        Ok(comments)
    }

    /// Lists all comments on a venue.
    ///
    /// # Arguments
    /// - `venue_id` - Database id of the venue
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - The venue's comments, newest first
    /// - `Err(AppError::NotFound)` - Venue does not exist
    /// - `Err(AppError)` - Database error
    pub async fn list_for_venue(&self, venue_id: i32) -> Result<Vec<Comment>, AppError> {
        VenueRepository::new(self.db)
            .find_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        let comments = CommentRepository::new(self.db).get_by_venue(venue_id).await?;

        Ok(comments)
    }
}

/// Recomputes a venue's rating aggregates from its comment set.
///
/// Runs inside the caller's transaction, after the comment write, so the
/// committed state always satisfies the aggregate invariant.
///
/// # Arguments
/// - `txn` - Open transaction the comment write ran in
/// - `venue_id` - Database id of the venue to recompute
///
/// # Returns
/// - `Ok(())` - Aggregates written
/// - `Err(AppError)` - Database error
pub async fn recompute_venue_stats(
    txn: &DatabaseTransaction,
    venue_id: i32,
) -> Result<(), AppError> {
    let ratings = CommentRepository::new(txn).ratings_for_venue(venue_id).await?;

    VenueRepository::new(txn)
        .update_rating_stats(venue_id, average_rating(&ratings), ratings.len() as i32)
        .await?;

    Ok(())
}

/// Looks up a comment and checks it belongs to the given user.
///
/// A comment owned by another user is reported as missing rather than
/// forbidden, so the response does not reveal other users' comment ids.
async fn find_owned_comment(
    txn: &DatabaseTransaction,
    comment_id: i32,
    user_id: i32,
) -> Result<Comment, AppError> {
    let comment = CommentRepository::new(txn)
        .find_by_id(comment_id)
        .await?
        .filter(|c| c.user_id == user_id)
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok(comment)
}

fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}
