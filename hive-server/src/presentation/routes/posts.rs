use axum::Router;
use axum::routing::{get, post, put};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{
    comment_on_post, create_post, get_post, like_post, list_posts,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post))
        .route("/{id}/like", put(like_post))
        .route("/{id}/comment", post(comment_on_post))
}
