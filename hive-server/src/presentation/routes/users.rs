use axum::Router;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::users::{
    follow_user, get_profile, search_users, update_profile,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_users))
        .route("/{id}", get(get_profile).put(update_profile))
        .route("/{id}/follow", post(follow_user))
}
