use std::path::PathBuf;

use crate::application::services::DEFAULT_BATCH_SIZE;

/// Service configuration, resolved entirely from environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub media: MediaSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct MediaSettings {
    /// Root directory video references are resolved under.
    pub video_root: PathBuf,
    pub ffmpeg_binary: String,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TranslationSettings {
    /// Absent key is legal: translation degrades to passthrough.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub target_language: String,
    pub batch_size: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = env_or("SERVER_PORT", "8002");
        let port: u16 = port
            .parse()
            .map_err(|_| SettingsError::Invalid("SERVER_PORT", port.clone()))?;

        let batch_size = env_or("TRANSLATION_BATCH_SIZE", &DEFAULT_BATCH_SIZE.to_string());
        let batch_size: usize = batch_size
            .parse()
            .map_err(|_| SettingsError::Invalid("TRANSLATION_BATCH_SIZE", batch_size.clone()))?;

        Ok(Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port,
            },
            media: MediaSettings {
                video_root: PathBuf::from(env_or("VIDEO_ROOT_DIR", "/app/videos")),
                ffmpeg_binary: env_or("FFMPEG_BINARY", "ffmpeg"),
            },
            transcription: TranscriptionSettings {
                endpoint: env_or(
                    "WHISPER_API_URL",
                    "https://api.openai.com/v1/audio/transcriptions",
                ),
                api_key: std::env::var("WHISPER_API_KEY").unwrap_or_default(),
                model: env_or("WHISPER_MODEL", "whisper-1"),
                language: std::env::var("WHISPER_LANGUAGE").ok().filter(|v| !v.is_empty()),
            },
            translation: TranslationSettings {
                api_key: std::env::var("TRANSLATION_API_KEY")
                    .ok()
                    .filter(|v| !v.is_empty()),
                base_url: env_or("TRANSLATION_BASE_URL", "https://api.openai.com/v1"),
                model: env_or("TRANSLATION_MODEL", "gpt-4o-mini"),
                target_language: env_or("TARGET_LANGUAGE", "English"),
                batch_size,
            },
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
