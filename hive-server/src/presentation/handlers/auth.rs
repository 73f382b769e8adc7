use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::auth_service::AuthResult;
use crate::domain::user::{GoogleSignInRequest, LoginRequest, RegisterRequest, User};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

// Body fields default to empty strings so a missing field produces the
// contract's 400 message instead of a deserialization rejection.

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterDto {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginDto {
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleSignInDto {
    #[serde(default)]
    pub(crate) token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthResponseDto {
    pub(crate) user: AuthUserDto,
    pub(crate) token: String,
}

/// Auth responses project the user down to identity fields only.
#[derive(Debug, Serialize)]
pub(crate) struct AuthUserDto {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) email: String,
}

impl From<User> for AuthUserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
        }
    }
}

impl From<AuthResult> for AuthResponseDto {
    fn from(result: AuthResult) -> Self {
        Self {
            user: result.user.into(),
            token: result.token,
        }
    }
}

pub(crate) async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> AppResult<(StatusCode, Json<AuthResponseDto>)> {
    let req = RegisterRequest {
        name: dto.name,
        username: dto.username,
        email: dto.email,
        password: dto.password,
    };

    let result = state.auth_service.register(req).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

pub(crate) async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> AppResult<(StatusCode, Json<AuthResponseDto>)> {
    let req = LoginRequest {
        email: dto.email,
        password: dto.password,
    };

    let result = state.auth_service.login(req).await?;
    Ok((StatusCode::OK, Json(result.into())))
}

pub(crate) async fn google_sign_in(
    State(state): State<AppState>,
    Json(dto): Json<GoogleSignInDto>,
) -> AppResult<(StatusCode, Json<AuthResponseDto>)> {
    let req = GoogleSignInRequest { token: dto.token };

    let result = state.auth_service.google_sign_in(req).await?;
    Ok((StatusCode::OK, Json(result.into())))
}
