use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Venue record with its comments and derived rating aggregates.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueDto {
    pub id: i32,
    pub venue_id: String,
    pub venue_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub description: Option<String>,
    pub average_rating: f64,
    pub total_comments: i32,
    pub comments: Vec<VenueCommentDto>,
}

/// Venue summary embedded in event responses.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueSummaryDto {
    pub id: i32,
    pub venue_id: String,
    pub venue_name: String,
    pub address: String,
}

/// One comment as it appears on a venue.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueCommentDto {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Body for creating a venue.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueDto {
    pub venue_id: String,
    pub venue_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub description: Option<String>,
}

/// Body for partially updating a venue's descriptive fields.
///
/// The rating aggregates are derived and cannot be set through this shape.
#[derive(Serialize, Deserialize, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVenueDto {
    pub venue_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// Body for the venue-side comment append route.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueCommentDto {
    pub comment: String,
    pub rating: i32,
}
