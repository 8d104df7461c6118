use std::path::Path;

use async_trait::async_trait;

/// Extracts mono 16 kHz PCM audio from a source video into a scratch file.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract(&self, video_path: &Path, audio_path: &Path)
        -> Result<(), AudioExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioExtractorError {
    #[error("failed to spawn media tool: {0}")]
    SpawnFailed(std::io::Error),
    #[error("audio extraction failed: {0}")]
    ExtractionFailed(String),
}
