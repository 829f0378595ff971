use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        venue::{CreateVenueCommentDto, CreateVenueDto, UpdateVenueDto, VenueCommentDto, VenueDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            comment::AddCommentParams,
            venue::{CreateVenueParams, UpdateVenueParams},
        },
        service::{comment::CommentService, venue::VenueService},
        state::AppState,
    },
};

/// Tag for grouping venue endpoints in OpenAPI documentation
pub static VENUE_TAG: &str = "venue";

/// Get all venues.
///
/// Returns every venue in the directory with its comments and derived rating
/// aggregates. Publicly accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of all venues
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/venues",
    tag = VENUE_TAG,
    responses(
        (status = 200, description = "List of all venues", body = Vec<VenueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venues(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let venues = VenueService::new(&state.db).get_all().await?;

    Ok(Json(
        venues.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single venue.
///
/// Returns one venue by database id, with its comments and derived rating
/// aggregates. Publicly accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Database id of the venue
///
/// # Returns
/// - `200 OK` - The venue
/// - `404 Not Found` - No venue with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    tag = VENUE_TAG,
    params(
        ("id" = i32, Path, description = "Venue database id")
    ),
    responses(
        (status = 200, description = "The venue", body = VenueDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db).get(id).await?;

    Ok(Json(venue.into_dto()))
}

/// Get a venue's comments.
///
/// Returns the venue's comments, newest first. Publicly accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Database id of the venue
///
/// # Returns
/// - `200 OK` - The venue's comments
/// - `404 Not Found` - No venue with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/venues/{id}/comments",
    tag = VENUE_TAG,
    params(
        ("id" = i32, Path, description = "Venue database id")
    ),
    responses(
        (status = 200, description = "The venue's comments", body = Vec<VenueCommentDto>),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).list_for_venue(id).await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_venue_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Add a comment to a venue.
///
/// Appends a comment through the venue route and returns the updated venue.
/// The same comment row also appears in the author's account comment list.
///
/// # Access Control
/// - Authenticated - Any logged-in user may comment
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Database id of the venue
/// - `payload` - Comment text and rating
///
/// # Returns
/// - `200 OK` - The venue with its updated comment list and aggregates
/// - `400 Bad Request` - Rating outside 1 to 5
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No venue with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/venues/{id}/comments",
    tag = VENUE_TAG,
    params(
        ("id" = i32, Path, description = "Venue database id")
    ),
    request_body = CreateVenueCommentDto,
    responses(
        (status = 200, description = "The updated venue", body = VenueDto),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_venue_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateVenueCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let venue = CommentService::new(&state.db)
        .add_to_venue(AddCommentParams {
            user_id: claims.sub,
            venue_id: id,
            comment: payload.comment,
            rating: payload.rating,
        })
        .await?;

    Ok(Json(venue.into_dto()))
}

/// Create a new venue.
///
/// Creates a venue with a fresh business key and zeroed rating aggregates.
///
/// # Access Control
/// - `Admin` - Only admins can create venues
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Venue creation data
///
/// # Returns
/// - `201 Created` - Successfully created venue
/// - `400 Bad Request` - Business key already in use
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/venues",
    tag = VENUE_TAG,
    request_body = CreateVenueDto,
    responses(
        (status = 201, description = "Successfully created venue", body = VenueDto),
        (status = 400, description = "Venue already exists", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let venue = VenueService::new(&state.db)
        .create(CreateVenueParams {
            venue_id: payload.venue_id,
            venue_name: payload.venue_name,
            latitude: payload.latitude,
            longitude: payload.longitude,
            address: payload.address,
            description: payload.description,
        })
        .await?;

    let venue = crate::server::model::venue::VenueWithComments {
        venue,
        comments: Vec::new(),
    };

    Ok((StatusCode::CREATED, Json(venue.into_dto())))
}

/// Update a venue.
///
/// Applies a partial update to the venue's descriptive fields. The derived
/// rating aggregates cannot be changed through this route.
///
/// # Access Control
/// - `Admin` - Only admins can update venues
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Database id of the venue
/// - `payload` - Optional replacement values
///
/// # Returns
/// - `200 OK` - The updated venue
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `404 Not Found` - No venue with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/venues/{id}",
    tag = VENUE_TAG,
    params(
        ("id" = i32, Path, description = "Venue database id")
    ),
    request_body = UpdateVenueDto,
    responses(
        (status = 200, description = "The updated venue", body = VenueDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = VenueService::new(&state.db);

    let venue = service
        .update(
            id,
            UpdateVenueParams {
                venue_name: payload.venue_name,
                latitude: payload.latitude,
                longitude: payload.longitude,
                address: payload.address,
                description: payload.description,
            },
        )
        .await?;

    let comments = CommentService::new(&state.db).list_for_venue(venue.id).await?;

    let venue = crate::server::model::venue::VenueWithComments { venue, comments };

    Ok(Json(venue.into_dto()))
}

/// Delete a venue.
///
/// Removes the venue together with its comments, favorites, and events.
///
/// # Access Control
/// - `Admin` - Only admins can delete venues
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Database id of the venue
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `404 Not Found` - No venue with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/venues/{id}",
    tag = VENUE_TAG,
    params(
        ("id" = i32, Path, description = "Venue database id")
    ),
    responses(
        (status = 200, description = "Venue deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    VenueService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto {
        message: "Venue deleted".to_string(),
    }))
}
