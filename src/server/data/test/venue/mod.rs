use crate::server::{
    data::venue::VenueRepository,
    model::venue::{CreateVenueParams, UpdateVenueParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_all;
mod find_by_id;
mod get_all;
mod update;

fn create_params(venue_id: &str) -> CreateVenueParams {
    CreateVenueParams {
        venue_id: venue_id.to_string(),
        venue_name: "City Hall".to_string(),
        latitude: 22.28,
        longitude: 114.17,
        address: "5 Edinburgh Place".to_string(),
        description: Some("Concert hall by the harbour".to_string()),
    }
}
