use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAuthor};

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) author: PostAuthor,
    pub(crate) content: String,
    pub(crate) image: Option<String>,
}

/// Offset pagination over the newest-first post list. Values are already
/// sanitized to be >= 1 by the time they reach the repository.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pagination {
    pub(crate) page: u32,
    pub(crate) limit: u32,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError>;
    async fn list_posts(&self, pagination: Pagination) -> Result<Vec<Post>, DomainError>;
    async fn total_posts(&self) -> Result<u64, DomainError>;
    async fn increment_likes(&self, id: &str) -> Result<Option<u32>, DomainError>;
    async fn increment_comments(&self, id: &str) -> Result<Option<u32>, DomainError>;
}
