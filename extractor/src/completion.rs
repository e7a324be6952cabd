use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("model endpoint returned an error: {0}")]
    Api(String),
    #[error("model response contained no candidates")]
    EmptyResponse,
}

/// Single-shot text completion against a hosted model. One request in,
/// one plain-text reply out; no conversation state, no streaming.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
