use axum::Router;

use super::AppState;

pub(crate) mod posts;
pub(crate) mod users;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/session", users::session_router())
        .nest("/posts", posts::router())
}
