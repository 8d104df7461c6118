use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Job, JobId, JobStatus, StageTimings};

/// Process-lifetime task store. Readers get full snapshots under a read
/// lock; each job's single terminal transition happens under the write lock,
/// so no torn state is ever visible while a job is pending.
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn create(&self, job: &Job) -> Result<(), JobStoreError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(JobStoreError::AlreadyExists(job.id));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn complete(
        &self,
        id: JobId,
        srt_path: String,
        timing: StageTimings,
    ) -> Result<(), JobStoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs.get_mut(&id).ok_or(JobStoreError::NotFound(id))?;
        if job.status.is_terminal() {
            return Err(JobStoreError::AlreadyTerminal(id));
        }
        job.status = JobStatus::Completed;
        job.srt_path = Some(srt_path);
        job.timing = Some(timing);
        job.updated_at = Utc::now();
        Ok(())
    }

    async fn fail(&self, id: JobId, error_message: &str) -> Result<(), JobStoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs.get_mut(&id).ok_or(JobStoreError::NotFound(id))?;
        if job.status.is_terminal() {
            return Err(JobStoreError::AlreadyTerminal(id));
        }
        job.status = JobStatus::Error;
        job.error_message = Some(error_message.to_string());
        job.updated_at = Utc::now();
        Ok(())
    }
}
