use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A user row as the Store holds it. The password hash lives next to the row
/// in the Store, never on this type, so projections cannot leak it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) avatar: Option<String>,
    pub(crate) bio: Option<String>,
    pub(crate) followers: u32,
    pub(crate) following: u32,
    pub(crate) posts: u32,
}

impl User {
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            email: email.into(),
            avatar: None,
            bio: None,
            followers: 0,
            following: 0,
            posts: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RegisterRequest {
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl RegisterRequest {
    /// All four fields are required. Values are stored verbatim; the contract
    /// does not trim or lowercase anything.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if self.name.is_empty()
            || self.username.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
        {
            return Err(DomainError::Validation("All fields are required"));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(DomainError::Validation("Email and password are required"));
        }
        Ok(self)
    }
}

/// Credential issued by an external identity provider. Not verified here;
/// only its presence is checked.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GoogleSignInRequest {
    pub(crate) token: String,
}

impl GoogleSignInRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if self.token.is_empty() {
            return Err(DomainError::Validation("Google token is required"));
        }
        Ok(self)
    }
}
