use async_trait::async_trait;

use crate::domain::Session;

/// Session persistence owned by the surrounding service; the core operates on
/// whatever backend the caller injects (in-memory map, external cache, ...).
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session_id: &str) -> Result<Option<Session>, SessionStoreError>;

    async fn put(&self, session: Session) -> Result<(), SessionStoreError>;

    async fn delete(&self, session_id: &str) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session backend unavailable: {0}")]
    Unavailable(String),
}
