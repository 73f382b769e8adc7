use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub(crate) user: User,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password_hash: String,
}

/// Partial profile update. `None` means "field absent"; an empty string is
/// treated the same way and leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProfilePatch {
    pub(crate) name: Option<String>,
    pub(crate) bio: Option<String>,
    pub(crate) avatar: Option<String>,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn search_users(&self, query: &str) -> Result<Vec<User>, DomainError>;
    async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<Option<User>, DomainError>;
    async fn increment_followers(&self, id: &str) -> Result<Option<u32>, DomainError>;
}
