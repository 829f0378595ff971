use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::venue::VenueSummaryDto;

/// Event record with its venue summary and scheduled dates.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub presenter: Option<String>,
    pub price: Option<String>,
    pub venue: Option<VenueSummaryDto>,
    pub dates: Vec<EventDateDto>,
}

/// One scheduled {date, time} entry of an event.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDateDto {
    pub date: String,
    pub time: String,
}

/// Body for creating an event. The venue is referenced by its business key.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: String,
    pub description: Option<String>,
    pub presenter: Option<String>,
    pub price: Option<String>,
    pub venue_id: String,
    #[serde(default)]
    pub dates: Vec<EventDateDto>,
}

/// Body for partially updating an event. Absent fields are left unchanged;
/// a present `dates` list replaces the stored date entries wholesale.
#[derive(Serialize, Deserialize, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub presenter: Option<String>,
    pub price: Option<String>,
    pub venue_id: Option<String>,
    pub dates: Option<Vec<EventDateDto>>,
}
