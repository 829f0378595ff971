//! Account routes: registration, login, favorites, and the user-side
//! comment operations.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        auth::CredentialsDto,
        comment::{CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::{LoginParams, RegisterParams},
            comment::{AddCommentParams, DeleteCommentParams, UpdateCommentParams},
            favorite::FavoriteParams,
        },
        service::{auth::AuthService, comment::CommentService, favorite::FavoriteService},
        state::AppState,
    },
};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service
        .register(RegisterParams {
            username: payload.username,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service
        .login(LoginParams {
            username: payload.username,
            password: payload.password,
        })
        .await?;

    Ok(Json(session.into_dto()))
}

pub async fn get_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let venues = FavoriteService::new(&state.db).list(claims.sub).await?;

    Ok(Json(
        venues.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>(),
    ))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let venues = FavoriteService::new(&state.db)
        .add(FavoriteParams {
            user_id: claims.sub,
            venue_id,
        })
        .await?;

    Ok(Json(
        venues.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>(),
    ))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let venues = FavoriteService::new(&state.db)
        .remove(FavoriteParams {
            user_id: claims.sub,
            venue_id,
        })
        .await?;

    Ok(Json(
        venues.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>(),
    ))
}

pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let comments = CommentService::new(&state.db).list_for_user(claims.sub).await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}

pub async fn get_comments_for_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let comments = CommentService::new(&state.db)
        .list_for_user_venue(claims.sub, venue_id)
        .await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_venue_dto())
            .collect::<Vec<_>>(),
    ))
}

pub async fn add_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let comments = CommentService::new(&state.db)
        .add(AddCommentParams {
            user_id: claims.sub,
            venue_id: payload.venue_id,
            comment: payload.comment,
            rating: payload.rating,
        })
        .await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}

pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(comment_id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let comments = CommentService::new(&state.db)
        .update(UpdateCommentParams {
            comment_id,
            user_id: claims.sub,
            comment: payload.comment,
            rating: payload.rating,
        })
        .await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    CommentService::new(&state.db)
        .delete(DeleteCommentParams {
            comment_id,
            user_id: claims.sub,
        })
        .await?;

    Ok(Json(MessageDto {
        message: "Comment deleted successfully".to_string(),
    }))
}
