use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::user::User;

/// Author fields frozen into a post at creation time. Later profile edits do
/// not rewrite existing posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostAuthor {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) avatar: Option<String>,
}

impl PostAuthor {
    pub(crate) fn snapshot_of(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: String,
    pub(crate) author: PostAuthor,
    pub(crate) content: String,
    pub(crate) image: Option<String>,
    pub(crate) likes: u32,
    pub(crate) comments: u32,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) content: String,
    pub(crate) image: Option<String>,
}

impl CreatePostRequest {
    /// Content must be present. It is deliberately not trimmed: the contract
    /// accepts whitespace-only content.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if self.content.is_empty() {
            return Err(DomainError::Validation("Content is required"));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentRequest {
    pub(crate) content: String,
}

impl CommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if self.content.is_empty() {
            return Err(DomainError::Validation("Comment content is required"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentRequest, CreatePostRequest, PostAuthor};
    use crate::domain::error::DomainError;
    use crate::domain::user::User;

    #[test]
    fn create_post_rejects_empty_content() {
        let req = CreatePostRequest {
            content: String::new(),
            image: None,
        };
        let err = req.validate().expect_err("empty content must be rejected");
        assert!(matches!(err, DomainError::Validation("Content is required")));
    }

    #[test]
    fn create_post_accepts_whitespace_only_content() {
        let req = CreatePostRequest {
            content: "   ".to_string(),
            image: None,
        };
        let validated = req.validate().expect("whitespace content is accepted");
        assert_eq!(validated.content, "   ");
    }

    #[test]
    fn comment_rejects_empty_content() {
        let err = CommentRequest {
            content: String::new(),
        }
        .validate()
        .expect_err("empty comment must be rejected");
        assert!(matches!(
            err,
            DomainError::Validation("Comment content is required")
        ));
    }

    #[test]
    fn author_snapshot_copies_profile_fields() {
        let mut user = User::new("101", "Sarah Johnson", "sarahj", "sarah@example.com");
        user.avatar = Some("/placeholder.svg".to_string());

        let author = PostAuthor::snapshot_of(&user);
        assert_eq!(author.id, "101");
        assert_eq!(author.name, "Sarah Johnson");
        assert_eq!(author.username, "sarahj");
        assert_eq!(author.avatar.as_deref(), Some("/placeholder.svg"));
    }
}
