use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, init_data},
        auth::{
            add_comment, add_favorite, delete_comment, get_comments, get_comments_for_venue,
            get_favorites, login, register, remove_favorite, update_comment,
        },
        event::{
            self, create_event, delete_event, get_event, get_events, get_events_by_venue,
            update_event,
        },
        user::{self, delete_user, get_user, get_users},
        venue::{
            self, add_venue_comment, create_venue, delete_venue, get_venue, get_venue_comments,
            get_venues, update_venue,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    venue::get_venues,
    venue::get_venue,
    venue::get_venue_comments,
    venue::add_venue_comment,
    venue::create_venue,
    venue::update_venue,
    venue::delete_venue,
    event::get_events,
    event::get_events_by_venue,
    event::get_event,
    event::create_event,
    event::update_event,
    event::delete_event,
    user::get_users,
    user::get_user,
    user::delete_user,
    admin::init_data,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/favorites", get(get_favorites))
        .route(
            "/api/auth/favorites/{venue_id}",
            post(add_favorite).delete(remove_favorite),
        )
        .route("/api/auth/comments", get(get_comments).post(add_comment))
        .route(
            "/api/auth/comments/venue/{venue_id}",
            get(get_comments_for_venue),
        )
        .route(
            "/api/auth/comments/{comment_id}",
            put(update_comment).delete(delete_comment),
        )
        .route("/api/venues", get(get_venues).post(create_venue))
        .route(
            "/api/venues/{id}",
            get(get_venue).put(update_venue).delete(delete_venue),
        )
        .route(
            "/api/venues/{id}/comments",
            get(get_venue_comments).post(add_venue_comment),
        )
        .route("/api/events", get(get_events).post(create_event))
        .route("/api/events/venue/{venue_id}", get(get_events_by_venue))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/users", get(get_users))
        .route("/api/users/{id}", get(get_user).delete(delete_user))
        .route("/api/admin/init-data", post(init_data))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
