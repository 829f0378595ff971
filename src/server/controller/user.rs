use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// Returns every user account without the stored password hashes.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - List of all users
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "List of all users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(
        users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single user.
///
/// Returns one user account without the stored password hash.
///
/// # Access Control
/// - `Admin` - Only admins can look up users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Database id of the user
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User database id")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok(Json(user.into_dto()))
}

/// Delete a user.
///
/// Destroys the account together with its comments and favorites; the
/// rating aggregates of every venue the user had commented on are repaired
/// in the same transaction.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Database id of the user to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin claim
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User database id")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    UserService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto {
        message: "User deleted".to_string(),
    }))
}
