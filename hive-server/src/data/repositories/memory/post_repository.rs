use std::sync::Arc;

use async_trait::async_trait;

use crate::data::post_repository::{NewPost, Pagination, PostRepository};
use crate::data::store::Store;
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Clone)]
pub(crate) struct MemoryPostRepository {
    store: Arc<Store>,
}

impl MemoryPostRepository {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        self.store.insert_post(input)
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        self.store.get_post(id)
    }

    async fn list_posts(&self, pagination: Pagination) -> Result<Vec<Post>, DomainError> {
        self.store.posts_page(pagination)
    }

    async fn total_posts(&self) -> Result<u64, DomainError> {
        self.store.post_count()
    }

    async fn increment_likes(&self, id: &str) -> Result<Option<u32>, DomainError> {
        self.store.increment_likes(id)
    }

    async fn increment_comments(&self, id: &str) -> Result<Option<u32>, DomainError> {
        self.store.increment_comments(id)
    }
}
