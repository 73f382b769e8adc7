use axum::Router;

use super::AppState;

pub(crate) mod auth;
pub(crate) mod posts;
pub(crate) mod users;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/posts", posts::router())
        .nest("/api/users", users::router())
}
