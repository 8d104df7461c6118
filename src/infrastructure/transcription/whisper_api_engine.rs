use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Segment;

/// Speech recognition via an OpenAI-compatible `/audio/transcriptions`
/// endpoint, requesting the verbose response so segment timestamps come back.
pub struct WhisperApiEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    language: Option<String>,
}

impl WhisperApiEngine {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            language,
        }
    }
}

#[derive(Deserialize)]
struct VerboseTranscriptionResponse {
    #[serde(default)]
    segments: Vec<ApiSegment>,
}

#[derive(Deserialize)]
struct ApiSegment {
    start: f64,
    end: f64,
    text: String,
}

#[async_trait]
impl TranscriptionEngine for WhisperApiEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<Vec<Segment>, TranscriptionError> {
        let audio_data = tokio::fs::read(audio_path)
            .await
            .map_err(TranscriptionError::Io)?;

        let file_part = multipart::Part::bytes(audio_data)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", "verbose_json");
        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        tracing::debug!(endpoint = %self.endpoint, "Sending audio for transcription");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: VerboseTranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        let segments: Vec<Segment> = result
            .segments
            .into_iter()
            .map(|s| Segment::new(s.start, s.end, s.text))
            .collect();

        tracing::info!(segments = segments.len(), "Transcription completed");

        Ok(segments)
    }
}
