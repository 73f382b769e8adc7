use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::posts_service::ListPostsResult;
use crate::domain::post::{CommentRequest, CreatePostRequest, Post, PostAuthor};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

/// Raw query strings: absent, non-numeric, or non-positive values silently
/// fall back to the defaults rather than rejecting the request.
#[derive(Debug, Deserialize)]
pub(crate) struct ListPostsQuery {
    pub(crate) page: Option<String>,
    pub(crate) limit: Option<String>,
}

fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthorDto {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) avatar: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostDto {
    pub(crate) id: String,
    pub(crate) author: AuthorDto,
    pub(crate) content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) image: Option<String>,
    pub(crate) likes: u32,
    pub(crate) comments: u32,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageCursorDto {
    pub(crate) page: u32,
    pub(crate) limit: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListPostsResponseDto {
    pub(crate) posts: Vec<PostDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) next: Option<PageCursorDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) previous: Option<PageCursorDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatePostDto {
    #[serde(default)]
    pub(crate) content: String,
    pub(crate) image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentDto {
    #[serde(default)]
    pub(crate) content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LikeResponseDto {
    pub(crate) likes: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentResponseDto {
    pub(crate) success: bool,
    pub(crate) comment_count: u32,
}

impl From<PostAuthor> for AuthorDto {
    fn from(author: PostAuthor) -> Self {
        Self {
            id: author.id,
            name: author.name,
            username: author.username,
            avatar: author.avatar,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: post.author.into(),
            content: post.content,
            image: post.image,
            likes: post.likes,
            comments: post.comments,
            created_at: post.created_at,
        }
    }
}

impl From<ListPostsResult> for ListPostsResponseDto {
    fn from(result: ListPostsResult) -> Self {
        let has_more = u64::from(result.page) * u64::from(result.limit) < result.total;
        Self {
            posts: result.posts.into_iter().map(PostDto::from).collect(),
            next: has_more.then(|| PageCursorDto {
                page: result.page + 1,
                limit: result.limit,
            }),
            previous: (result.page > 1).then(|| PageCursorDto {
                page: result.page - 1,
                limit: result.limit,
            }),
        }
    }
}

pub(crate) async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> AppResult<(StatusCode, Json<ListPostsResponseDto>)> {
    let page = positive_or(query.page.as_deref(), DEFAULT_PAGE);
    let limit = positive_or(query.limit.as_deref(), DEFAULT_LIMIT);

    let result = state.posts_service.list_posts(page, limit).await?;
    Ok((StatusCode::OK, Json(ListPostsResponseDto::from(result))))
}

pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let post = state.posts_service.get_post(&id).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

pub(crate) async fn create_post(
    State(state): State<AppState>,
    Json(dto): Json<CreatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let req = CreatePostRequest {
        content: dto.content,
        image: dto.image,
    };

    let post = state.posts_service.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

pub(crate) async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<LikeResponseDto>)> {
    let likes = state.posts_service.like_post(&id).await?;
    Ok((StatusCode::OK, Json(LikeResponseDto { likes })))
}

pub(crate) async fn comment_on_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<CommentDto>,
) -> AppResult<(StatusCode, Json<CommentResponseDto>)> {
    let req = CommentRequest {
        content: dto.content,
    };

    let comment_count = state.posts_service.comment_on_post(&id, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponseDto {
            success: true,
            comment_count,
        }),
    ))
}
