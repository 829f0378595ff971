//! Comment domain models and parameters.
//!
//! A comment is stored once, keyed by its own id, and serves both the
//! user-side listing (with venue info attached) and the venue-side listing
//! (with the author's username snapshot).

use chrono::{DateTime, Utc};

use crate::model::{comment::UserCommentDto, venue::VenueCommentDto};

/// A user's rated comment on a venue.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Database id of the comment, shared by both views.
    pub id: i32,
    /// Database id of the author.
    pub user_id: i32,
    /// Database id of the venue.
    pub venue_id: i32,
    /// Author's username as it was when the comment was created.
    pub username: String,
    /// Comment text.
    pub body: String,
    /// Rating, 1 to 5.
    pub rating: i32,
    /// Creation timestamp, identical in both views.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Comment` - The converted comment domain model
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            venue_id: entity.venue_id,
            username: entity.username,
            body: entity.body,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }

    /// Converts the comment to the venue-side DTO.
    ///
    /// # Returns
    /// - `VenueCommentDto` - Comment with the author's username snapshot
    pub fn into_venue_dto(self) -> VenueCommentDto {
        VenueCommentDto {
            id: self.id,
            user_id: self.user_id,
            username: self.username,
            comment: self.body,
            rating: self.rating,
            created_at: self.created_at,
        }
    }
}

/// Comment paired with its venue's name and address for user-side listings.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithVenue {
    /// The comment itself.
    pub comment: Comment,
    /// Display name of the commented venue.
    pub venue_name: String,
    /// Address of the commented venue.
    pub address: String,
}

impl CommentWithVenue {
    /// Converts the composite to the user-side comment DTO.
    ///
    /// # Returns
    /// - `UserCommentDto` - Comment with venue name and address attached
    pub fn into_dto(self) -> UserCommentDto {
        UserCommentDto {
            id: self.comment.id,
            venue_id: self.comment.venue_id,
            venue_name: self.venue_name,
            address: self.address,
            comment: self.comment.body,
            rating: self.comment.rating,
            created_at: self.comment.created_at,
        }
    }
}

/// Parameters for adding a comment.
#[derive(Debug, Clone)]
pub struct AddCommentParams {
    /// Database id of the authenticated author.
    pub user_id: i32,
    /// Database id of the target venue.
    pub venue_id: i32,
    /// Comment text.
    pub comment: String,
    /// Rating, 1 to 5.
    pub rating: i32,
}

/// Parameters for editing a comment.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    /// Database id of the comment to edit.
    pub comment_id: i32,
    /// Database id of the authenticated author; only the author may edit.
    pub user_id: i32,
    /// Replacement comment text.
    pub comment: Option<String>,
    /// Replacement rating, 1 to 5.
    pub rating: Option<i32>,
}

/// Parameters for deleting a comment.
#[derive(Debug, Clone)]
pub struct DeleteCommentParams {
    /// Database id of the comment to delete.
    pub comment_id: i32,
    /// Database id of the authenticated author; only the author may delete.
    pub user_id: i32,
}
