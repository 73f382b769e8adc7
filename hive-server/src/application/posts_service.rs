use crate::data::fixtures;
use crate::data::post_repository::{NewPost, Pagination, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CommentRequest, CreatePostRequest, Post};

#[derive(Debug, Clone)]
pub(crate) struct ListPostsResult {
    pub(crate) posts: Vec<Post>,
    pub(crate) page: u32,
    pub(crate) limit: u32,
    pub(crate) total: u64,
}

pub(crate) struct PostsService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostsService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_posts(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ListPostsResult, DomainError> {
        let posts = self.repo.list_posts(Pagination { page, limit }).await?;
        let total = self.repo.total_posts().await?;

        Ok(ListPostsResult {
            posts,
            page,
            limit,
            total,
        })
    }

    pub(crate) async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or(DomainError::NotFound("Post"))
    }

    /// The author snapshot would come from the session once tokens are
    /// verified; until then it is pinned to the sentinel user.
    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let req = req.validate()?;

        self.repo
            .create_post(NewPost {
                author: fixtures::sentinel_author(),
                content: req.content,
                image: req.image,
            })
            .await
    }

    pub(crate) async fn like_post(&self, id: &str) -> Result<u32, DomainError> {
        self.repo
            .increment_likes(id)
            .await?
            .ok_or(DomainError::NotFound("Post"))
    }

    /// Missing post wins over missing content, matching the route order of
    /// the contract. The comment body is accepted but not retained.
    pub(crate) async fn comment_on_post(
        &self,
        id: &str,
        req: CommentRequest,
    ) -> Result<u32, DomainError> {
        if self.repo.get_post(id).await?.is_none() {
            return Err(DomainError::NotFound("Post"));
        }
        req.validate()?;

        self.repo
            .increment_comments(id)
            .await?
            .ok_or(DomainError::NotFound("Post"))
    }
}
