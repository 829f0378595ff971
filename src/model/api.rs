use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Confirmation body for operations that return no resource.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Summary returned by the bulk data loader.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummaryDto {
    pub message: String,
    pub venues_count: usize,
    pub events_count: usize,
    pub skipped_events: usize,
}
