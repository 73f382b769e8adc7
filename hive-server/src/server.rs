use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::application::auth_service::AuthService;
use crate::application::posts_service::PostsService;
use crate::application::users_service::UsersService;
use crate::data::fixtures;
use crate::data::repositories::memory::post_repository::MemoryPostRepository;
use crate::data::repositories::memory::session_repository::MemorySessionRepository;
use crate::data::repositories::memory::user_repository::MemoryUserRepository;
use crate::data::store::Store;
use crate::infrastructure::jwt::JwtService;
use crate::infrastructure::settings::Settings;
use crate::presentation::middleware::cors::apply_cors;
use crate::presentation::middleware::rate_limit::{RateLimiter, apply_rate_limit};
use crate::presentation::middleware::security_headers::apply_security_headers;
use crate::presentation::middleware::trace::apply_trace;
use crate::presentation::{AppState, http_handlers};

/// Builds the complete application: a freshly seeded Store, the three
/// services, and the full middleware chain.
pub fn app(settings: &Settings) -> anyhow::Result<Router> {
    let store = Arc::new(Store::new());
    fixtures::seed(&store).context("failed to seed fixtures")?;

    let users_repo = MemoryUserRepository::new(store.clone());
    let posts_repo = MemoryPostRepository::new(store.clone());
    let sessions_repo = MemorySessionRepository::new(store);

    let jwt = JwtService::new(&settings.jwt_secret, settings.jwt_ttl_seconds);
    let state = AppState::new(
        Arc::new(AuthService::new(users_repo.clone(), sessions_repo, jwt)),
        Arc::new(PostsService::new(posts_repo)),
        Arc::new(UsersService::new(users_repo)),
    );

    let limiter = Arc::new(RateLimiter::new(
        Duration::from_secs(settings.rate_limit_window_secs),
        settings.rate_limit_max_requests,
    ));

    let app = http_handlers::routes(state);
    let app = apply_rate_limit(app, limiter);
    let app = apply_security_headers(app);
    let app = apply_cors(app, settings)?;
    Ok(apply_trace(app))
}

pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let app = app(&settings)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server running on port {}", settings.port);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
