use std::sync::Arc;

use async_trait::async_trait;

use crate::data::session_repository::{NewSession, SessionRepository};
use crate::data::store::Store;
use crate::domain::error::DomainError;

#[derive(Clone)]
pub(crate) struct MemorySessionRepository {
    store: Arc<Store>,
}

impl MemorySessionRepository {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn insert_session(&self, input: NewSession) -> Result<(), DomainError> {
        self.store.insert_session(input)
    }
}
