use std::sync::Arc;

use async_trait::async_trait;

use crate::data::store::Store;
use crate::data::user_repository::{NewUser, ProfilePatch, UserCredentials, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Clone)]
pub(crate) struct MemoryUserRepository {
    store: Arc<Store>,
}

impl MemoryUserRepository {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        self.store.insert_user(input)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        self.store.find_user_by_id(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        self.store.find_user_by_email(email)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.store.find_user_by_username(username)
    }

    async fn search_users(&self, query: &str) -> Result<Vec<User>, DomainError> {
        self.store.search_users(query)
    }

    async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<Option<User>, DomainError> {
        self.store.update_user(id, patch)
    }

    async fn increment_followers(&self, id: &str) -> Result<Option<u32>, DomainError> {
        self.store.increment_followers(id)
    }
}
