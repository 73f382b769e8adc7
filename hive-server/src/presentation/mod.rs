use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::posts_service::PostsService;
use crate::application::users_service::UsersService;
use crate::data::repositories::memory::post_repository::MemoryPostRepository;
use crate::data::repositories::memory::session_repository::MemorySessionRepository;
use crate::data::repositories::memory::user_repository::MemoryUserRepository;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<MemoryUserRepository, MemorySessionRepository>>,
    pub(crate) posts_service: Arc<PostsService<MemoryPostRepository>>,
    pub(crate) users_service: Arc<UsersService<MemoryUserRepository>>,
}

impl AppState {
    pub(crate) fn new(
        auth_service: Arc<AuthService<MemoryUserRepository, MemorySessionRepository>>,
        posts_service: Arc<PostsService<MemoryPostRepository>>,
        users_service: Arc<UsersService<MemoryUserRepository>>,
    ) -> Self {
        Self {
            auth_service,
            posts_service,
            users_service,
        }
    }
}
