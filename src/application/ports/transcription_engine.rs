use std::path::Path;

use async_trait::async_trait;

use crate::domain::Segment;

/// Produces timed text segments from an audio file via an external
/// speech-recognition model.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<Vec<Segment>, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("failed to read audio file: {0}")]
    Io(std::io::Error),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
