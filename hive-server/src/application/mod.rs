pub(crate) mod auth_service;
pub(crate) mod posts_service;
pub(crate) mod users_service;
