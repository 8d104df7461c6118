pub mod llm;
pub mod media;
pub mod observability;
pub mod store;
pub mod transcription;
