use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Get all events.
///
/// Returns every event with its venue summary and scheduled dates. Publicly
/// accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of all events
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "List of all events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok(Json(
        events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get events held at a venue.
///
/// Returns the events scheduled at the given venue. Publicly accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `venue_id` - Database id of the venue
///
/// # Returns
/// - `200 OK` - Events at that venue
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/venue/{venue_id}",
    tag = EVENT_TAG,
    params(
        ("venue_id" = i32, Path, description = "Venue database id")
    ),
    responses(
        (status = 200, description = "Events at that venue", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_by_venue(venue_id).await?;

    Ok(Json(
        events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single event.
///
/// Returns one event by database id. Publicly accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Database id of the event
///
/// # Returns
/// - `200 OK` - The event
/// - `404 Not Found` - No event with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event database id")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get(id).await?;

    Ok(Json(event.into_dto()))
}

/// Create a new event.
///
/// Assigns the next free event business key and resolves the hosting venue
/// by its business key.
///
/// # Access Control
/// - `Admin` - Only admins can create events
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Event creation data
///
/// # Returns
/// - `201 Created` - Successfully created event
/// - `400 Bad Request` - Referenced venue does not exist
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Venue not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let event = EventService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Update an event.
///
/// Applies a partial update; a present venue business key re-homes the
/// event, and a present date list replaces the stored entries wholesale.
///
/// # Access Control
/// - `Admin` - Only admins can update events
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Database id of the event
/// - `payload` - Optional replacement values
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Referenced venue does not exist
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `404 Not Found` - No event with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event database id")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "The updated event", body = EventDto),
        (status = 400, description = "Venue not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let event = EventService::new(&state.db).update(id, payload).await?;

    Ok(Json(event.into_dto()))
}

/// Delete an event.
///
/// Deletes by the event's business key, matching the public API surface.
///
/// # Access Control
/// - `Admin` - Only admins can delete events
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `event_id` - Event business key
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `404 Not Found` - No event with that business key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i64, Path, description = "Event business key")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    EventService::new(&state.db).delete(event_id).await?;

    Ok(Json(MessageDto {
        message: "Event deleted".to_string(),
    }))
}
