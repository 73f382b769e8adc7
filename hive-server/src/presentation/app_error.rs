use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::domain::error::DomainError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    /// Shape reserved for 500s: `{error: "Server error", message: <detail>}`.
    fn server_error(message: String) -> Self {
        Self {
            error: "Server error".to_string(),
            message: Some(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Domain(err) => match &err {
                DomainError::Validation(_) | DomainError::AlreadyExists(_) => {
                    (StatusCode::BAD_REQUEST, ErrorBody::new(err.to_string()))
                }
                DomainError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, ErrorBody::new(err.to_string()))
                }
                DomainError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, ErrorBody::new(err.to_string()))
                }
                DomainError::Unexpected(detail) => {
                    // detail goes to the log stream, the body keeps the
                    // short client-facing shape
                    error!("unhandled service error: {detail}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorBody::server_error(detail.clone()),
                    )
                }
            },
            AppError::Internal(err) => {
                error!("internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::server_error(err.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
