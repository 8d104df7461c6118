use serde::Serialize;

/// Wall-clock duration of each pipeline stage, in seconds.
///
/// Recorded only once a job completes successfully; error jobs carry no
/// timing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTimings {
    pub audio_extraction: f64,
    pub transcription: f64,
    pub translation: f64,
    pub srt_generation: f64,
    pub cleanup: f64,
    pub total: f64,
}
