//! Venue domain models and parameters.
//!
//! Provides the venue domain model with its derived rating aggregates, the
//! composite model pairing a venue with its comments, and parameter types for
//! venue creation and update.

use crate::{
    model::venue::{VenueDto, VenueSummaryDto},
    server::model::comment::Comment,
};

/// Venue with location data and derived rating aggregates.
///
/// `average_rating` and `total_comments` are derived from the venue's
/// comments and recomputed on every comment write; they are never set
/// directly through the update path.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Database id of the venue.
    pub id: i32,
    /// Unique business key carried over from the source dataset.
    pub venue_id: String,
    /// Display name of the venue.
    pub venue_name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Street address.
    pub address: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Mean of all comment ratings rounded to one decimal, 0 when uncommented.
    pub average_rating: f64,
    /// Number of comments on the venue.
    pub total_comments: i32,
}

impl Venue {
    /// Converts an entity model to a venue domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Venue` - The converted venue domain model
    pub fn from_entity(entity: entity::venue::Model) -> Self {
        Self {
            id: entity.id,
            venue_id: entity.venue_id,
            venue_name: entity.venue_name,
            latitude: entity.latitude,
            longitude: entity.longitude,
            address: entity.address,
            description: entity.description,
            average_rating: entity.average_rating,
            total_comments: entity.total_comments,
        }
    }

    /// Converts the venue to a summary DTO for embedding in event responses.
    ///
    /// # Returns
    /// - `VenueSummaryDto` - Venue identity and address only
    pub fn into_summary_dto(self) -> VenueSummaryDto {
        VenueSummaryDto {
            id: self.id,
            venue_id: self.venue_id,
            venue_name: self.venue_name,
            address: self.address,
        }
    }
}

/// Venue paired with its comments for API responses.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueWithComments {
    /// The venue itself.
    pub venue: Venue,
    /// Comments on the venue, newest first.
    pub comments: Vec<Comment>,
}

impl VenueWithComments {
    /// Converts the composite to the full venue DTO.
    ///
    /// # Returns
    /// - `VenueDto` - Venue fields plus its comment list
    pub fn into_dto(self) -> VenueDto {
        VenueDto {
            id: self.venue.id,
            venue_id: self.venue.venue_id,
            venue_name: self.venue.venue_name,
            latitude: self.venue.latitude,
            longitude: self.venue.longitude,
            address: self.venue.address,
            description: self.venue.description,
            average_rating: self.venue.average_rating,
            total_comments: self.venue.total_comments,
            comments: self
                .comments
                .into_iter()
                .map(|c| c.into_venue_dto())
                .collect(),
        }
    }
}

/// Parameters for creating a venue.
#[derive(Debug, Clone)]
pub struct CreateVenueParams {
    /// Unique business key.
    pub venue_id: String,
    /// Display name.
    pub venue_name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Street address.
    pub address: String,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// Parameters for partially updating a venue's descriptive fields.
///
/// `None` fields are left unchanged. The derived aggregates are deliberately
/// absent from this shape.
#[derive(Debug, Clone, Default)]
pub struct UpdateVenueParams {
    pub venue_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub description: Option<String>,
}
