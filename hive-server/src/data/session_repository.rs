use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;

/// Issued session tokens. Write-only in the current contract: no endpoint
/// verifies a token yet, but every issued one is recorded.
#[derive(Debug, Clone)]
pub(crate) struct NewSession {
    pub(crate) token: String,
    pub(crate) user_id: String,
    pub(crate) issued_at: DateTime<Utc>,
}

#[async_trait]
pub(crate) trait SessionRepository: Send + Sync {
    async fn insert_session(&self, input: NewSession) -> Result<(), DomainError>;
}
