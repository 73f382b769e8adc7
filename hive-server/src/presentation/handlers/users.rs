use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::data::user_repository::ProfilePatch;
use crate::domain::user::User;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    pub(crate) q: Option<String>,
}

/// Full profile projection returned by the profile-read endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct UserProfileDto {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bio: Option<String>,
    pub(crate) followers: u32,
    pub(crate) following: u32,
    pub(crate) posts: u32,
}

/// Search results carry identity fields only.
#[derive(Debug, Serialize)]
pub(crate) struct UserBriefDto {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) avatar: Option<String>,
}

/// Update responses include `bio` but drop the counters.
#[derive(Debug, Serialize)]
pub(crate) struct UpdatedProfileDto {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bio: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct UpdateProfileDto {
    pub(crate) name: Option<String>,
    pub(crate) bio: Option<String>,
    pub(crate) avatar: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FollowResponseDto {
    pub(crate) success: bool,
    pub(crate) followers: u32,
}

impl From<User> for UserProfileDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            avatar: user.avatar,
            bio: user.bio,
            followers: user.followers,
            following: user.following,
            posts: user.posts,
        }
    }
}

impl From<User> for UserBriefDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            avatar: user.avatar,
        }
    }
}

impl From<User> for UpdatedProfileDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            avatar: user.avatar,
            bio: user.bio,
        }
    }
}

pub(crate) async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<(StatusCode, Json<Vec<UserBriefDto>>)> {
    let q = query.q.unwrap_or_default();
    let users = state.users_service.search_users(&q).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(UserBriefDto::from).collect()),
    ))
}

pub(crate) async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<UserProfileDto>)> {
    let user = state.users_service.get_profile(&id).await?;
    Ok((StatusCode::OK, Json(UserProfileDto::from(user))))
}

pub(crate) async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateProfileDto>,
) -> AppResult<(StatusCode, Json<UpdatedProfileDto>)> {
    let patch = ProfilePatch {
        name: dto.name,
        bio: dto.bio,
        avatar: dto.avatar,
    };

    let user = state.users_service.update_profile(&id, patch).await?;
    Ok((StatusCode::OK, Json(UpdatedProfileDto::from(user))))
}

pub(crate) async fn follow_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<FollowResponseDto>)> {
    let followers = state.users_service.follow_user(&id).await?;
    Ok((
        StatusCode::OK,
        Json(FollowResponseDto {
            success: true,
            followers,
        }),
    ))
}
