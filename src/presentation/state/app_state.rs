use std::sync::Arc;

use crate::application::ports::{
    AudioExtractor, JobStore, TranscriptionEngine, TranslationClient,
};
use crate::application::services::PipelineService;

pub struct AppState<A, T, L>
where
    A: AudioExtractor,
    T: TranscriptionEngine,
    L: TranslationClient,
{
    pub pipeline_service: Arc<PipelineService<A, T, L>>,
    pub job_store: Arc<dyn JobStore>,
}

impl<A, T, L> Clone for AppState<A, T, L>
where
    A: AudioExtractor,
    T: TranscriptionEngine,
    L: TranslationClient,
{
    fn clone(&self) -> Self {
        Self {
            pipeline_service: Arc::clone(&self.pipeline_service),
            job_store: Arc::clone(&self.job_store),
        }
    }
}
