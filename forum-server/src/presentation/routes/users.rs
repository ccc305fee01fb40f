use axum::{Router, routing::post};

use crate::presentation::AppState;
use crate::presentation::handlers::users::{fetch_user, login, register};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", post(register).get(fetch_user))
}

pub(crate) fn session_router() -> Router<AppState> {
    Router::new().route("/", post(login))
}
