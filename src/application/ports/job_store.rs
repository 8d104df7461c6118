use async_trait::async_trait;

use crate::domain::{Job, JobId, StageTimings};

/// Concurrent-safe task-state store keyed by job id.
///
/// Each job has a single writer (its own background execution) that moves it
/// to a terminal state exactly once; the API layer reads snapshots
/// concurrently. Store lifetime equals process lifetime.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn create(&self, job: &Job) -> Result<(), JobStoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError>;

    async fn complete(
        &self,
        id: JobId,
        srt_path: String,
        timing: StageTimings,
    ) -> Result<(), JobStoreError>;

    async fn fail(&self, id: JobId, error_message: &str) -> Result<(), JobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("job already exists: {0}")]
    AlreadyExists(JobId),
    #[error("job already in terminal state: {0}")]
    AlreadyTerminal(JobId),
}
