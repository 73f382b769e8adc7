use crate::data::user_repository::{ProfilePatch, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::User;

pub(crate) struct UsersService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UsersService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn get_profile(&self, id: &str) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("User"))
    }

    pub(crate) async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<User, DomainError> {
        self.repo
            .update_profile(id, patch)
            .await?
            .ok_or(DomainError::NotFound("User"))
    }

    /// Counter-only follow: no adjacency list, no duplicate-follow guard,
    /// no reciprocal "following" update.
    pub(crate) async fn follow_user(&self, id: &str) -> Result<u32, DomainError> {
        self.repo
            .increment_followers(id)
            .await?
            .ok_or(DomainError::NotFound("User"))
    }

    pub(crate) async fn search_users(&self, query: &str) -> Result<Vec<User>, DomainError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.search_users(query).await
    }
}
