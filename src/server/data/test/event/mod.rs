use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParams, EventDate, UpdateEventParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_event_id;
mod get_all;
mod get_by_venue;
mod next_event_id;
mod replace_dates;
mod update;

fn create_params(event_id: i64, venue_id: i32) -> CreateEventParams {
    CreateEventParams {
        event_id,
        title: "Evening Concert".to_string(),
        description: Some("An evening of chamber music".to_string()),
        presenter: Some("City Orchestra".to_string()),
        price: Some("$120".to_string()),
        venue_id,
        dates: vec![EventDate {
            date: "2026-09-01".to_string(),
            time: "20:00".to_string(),
        }],
    }
}
