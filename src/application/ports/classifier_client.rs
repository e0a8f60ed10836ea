use async_trait::async_trait;

/// Reserved reply meaning "the input could not be confidently mapped to a
/// value"; part of the wire contract with the classification service.
pub const AMBIGUOUS_SENTINEL: &str = "AMBIGUO";

/// Single-shot, stateless classification/extraction service.
#[async_trait]
pub trait ClassifierClient: Send + Sync {
    async fn classify(&self, prompt: &str) -> Result<String, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("request timed out")]
    Timeout,
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
