use chrono::{DateTime, Utc};

use super::{JobId, JobStatus, StageTimings};

/// One subtitle-generation job tracked by the in-memory store.
///
/// Created in `Pending` state at submission time and mutated exactly once,
/// to a terminal state, by the background pipeline execution. Jobs are never
/// deleted within the process lifetime.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub srt_path: Option<String>,
    pub error_message: Option<String>,
    pub timing: Option<StageTimings>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            status: JobStatus::Pending,
            srt_path: None,
            error_message: None,
            timing: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new()
    }
}
