use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, ImportSummaryDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::import::ImportService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Initialize the directory from the seed dataset.
///
/// Clears every venue and event and re-imports both from the JSON seed files
/// in the configured seed directory. Events referencing venues absent from
/// the dataset are skipped and counted.
///
/// # Access Control
/// - `Admin` - Only admins can run the bulk loader
///
/// # Arguments
/// - `state` - Application state containing the database connection and seed directory
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Import summary with inserted and skipped counts
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `500 Internal Server Error` - Unreadable seed files or database error
#[utoipa::path(
    post,
    path = "/api/admin/init-data",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Import summary", body = ImportSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn init_data(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let summary = ImportService::new(&state.db)
        .run(&state.seed_data_dir)
        .await?;

    Ok(Json(summary.into_dto()))
}
