use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the user's comments, with the venue's name and address attached.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserCommentDto {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub address: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Body for adding a comment through the account comment routes.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub venue_id: i32,
    pub comment: String,
    pub rating: i32,
}

/// Body for partially updating a comment. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentDto {
    pub comment: Option<String>,
    pub rating: Option<i32>,
}
