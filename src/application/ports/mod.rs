mod audio_extractor;
mod job_store;
mod transcription_engine;
mod translation_client;

pub use audio_extractor::{AudioExtractor, AudioExtractorError};
pub use job_store::{JobStore, JobStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_client::{TranslationClient, TranslationError};
