use async_trait::async_trait;

/// Text-completion collaborator used for translation.
///
/// A single `complete` call carries either a whole-batch prompt or a
/// single-segment prompt; the batching logic lives in the application layer.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Whether a credential is available. When false the batch translator
    /// degrades to passthrough instead of calling `complete`.
    fn is_configured(&self) -> bool;

    async fn complete(&self, prompt: &str) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation api key not configured")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
