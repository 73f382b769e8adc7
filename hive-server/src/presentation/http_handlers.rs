use axum::{Json, Router, http::StatusCode, routing::get};
use serde::Serialize;

use super::{AppState, routes};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .merge(routes::router())
        .fallback(route_not_found)
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Hive API",
    })
}

#[derive(Debug, Serialize)]
struct RouteNotFoundResponse {
    error: &'static str,
}

async fn route_not_found() -> (StatusCode, Json<RouteNotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundResponse {
            error: "Route not found",
        }),
    )
}
