use thiserror::Error;

/// Error taxonomy shared by all services. The `Display` output of every
/// variant except `Unexpected` is the exact client-visible message.
#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    AlreadyExists(&'static str),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
