use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioExtractor, AudioExtractorError};

/// Invokes ffmpeg to pull mono 16 kHz PCM WAV audio out of a video file.
pub struct FfmpegAudioExtractor {
    binary: String,
}

impl FfmpegAudioExtractor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegAudioExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract(
        &self,
        video_path: &Path,
        audio_path: &Path,
    ) -> Result<(), AudioExtractorError> {
        tracing::debug!(
            video = %video_path.display(),
            audio = %audio_path.display(),
            "Extracting audio via ffmpeg"
        );

        let output = Command::new(&self.binary)
            .arg("-i")
            .arg(video_path)
            .args(["-vn", "-acodec", "pcm_s16le", "-ar", "16000", "-ac", "1"])
            .arg(audio_path)
            .arg("-y")
            .output()
            .await
            .map_err(AudioExtractorError::SpawnFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // ffmpeg writes its whole log to stderr; the last line carries the error
            let detail = stderr.lines().last().unwrap_or("unknown error");
            return Err(AudioExtractorError::ExtractionFailed(format!(
                "ffmpeg exited with {}: {}",
                output.status, detail
            )));
        }

        Ok(())
    }
}
