use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use crate::application::ports::{
    AudioExtractor, AudioExtractorError, JobStore, JobStoreError, TranscriptionEngine,
    TranscriptionError, TranslationClient, TranslationError,
};
use crate::application::services::BatchTranslator;
use crate::domain::srt::render_srt;
use crate::domain::{Job, JobId, StageTimings};

/// Owns the task-state store and runs the end-to-end pipeline for one job:
/// extract audio, transcribe, translate, write the SRT file, remove the
/// scratch audio, recording wall-clock duration of every stage.
///
/// Each submission is dispatched fire-and-forget onto the runtime; there is
/// no pool limit, backpressure, or cancellation. Jobs submitted for the same
/// input path race on the same scratch file.
pub struct PipelineService<A, T, L> {
    audio_extractor: Arc<A>,
    transcription_engine: Arc<T>,
    translator: Arc<BatchTranslator<L>>,
    job_store: Arc<dyn JobStore>,
    video_root: PathBuf,
    target_language: String,
}

impl<A, T, L> PipelineService<A, T, L>
where
    A: AudioExtractor + 'static,
    T: TranscriptionEngine + 'static,
    L: TranslationClient + 'static,
{
    pub fn new(
        audio_extractor: Arc<A>,
        transcription_engine: Arc<T>,
        translator: Arc<BatchTranslator<L>>,
        job_store: Arc<dyn JobStore>,
        video_root: PathBuf,
        target_language: String,
    ) -> Self {
        Self {
            audio_extractor,
            transcription_engine,
            translator,
            job_store,
            video_root,
            target_language,
        }
    }

    pub fn job_store(&self) -> Arc<dyn JobStore> {
        Arc::clone(&self.job_store)
    }

    /// Stores a pending job, schedules its execution independently of the
    /// caller, and returns the fresh id immediately. The reference is not
    /// validated eagerly; a missing file becomes a terminal error state.
    pub async fn submit(self: Arc<Self>, video_path: String) -> Result<JobId, JobStoreError> {
        let job = Job::new();
        let job_id = job.id;
        self.job_store.create(&job).await?;

        let span =
            tracing::info_span!("subtitle_job", job_id = %job_id, video_path = %video_path);
        let service = self;
        tokio::spawn(
            async move {
                service.run_job(job_id, video_path).await;
            }
            .instrument(span),
        );

        Ok(job_id)
    }

    async fn run_job(&self, job_id: JobId, video_path: String) {
        let started = Instant::now();
        match self.run_pipeline(&video_path).await {
            Ok((srt_path, timing)) => {
                tracing::info!(
                    srt_path = %srt_path,
                    total_secs = timing.total,
                    "Subtitle generation completed"
                );
                if let Err(e) = self.job_store.complete(job_id, srt_path, timing).await {
                    tracing::error!(error = %e, "Failed to record job completion");
                }
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    elapsed_secs = started.elapsed().as_secs_f64(),
                    "Subtitle generation failed"
                );
                if let Err(store_err) = self.job_store.fail(job_id, &e.to_string()).await {
                    tracing::error!(error = %store_err, "Failed to record job failure");
                }
            }
        }
    }

    /// Stages run in strict sequence. On the error path the scratch audio
    /// file is left behind; only the success path removes it.
    async fn run_pipeline(
        &self,
        video_path: &str,
    ) -> Result<(String, StageTimings), PipelineError> {
        let full_video_path = self.video_root.join(video_path);
        if !full_video_path.exists() {
            return Err(PipelineError::VideoNotFound(
                full_video_path.display().to_string(),
            ));
        }

        let audio_path = scratch_audio_path(&full_video_path);
        let srt_path = full_video_path.with_extension("srt");

        let total_start = Instant::now();

        let stage = Instant::now();
        self.audio_extractor
            .extract(&full_video_path, &audio_path)
            .await
            .map_err(PipelineError::AudioExtraction)?;
        let audio_extraction = stage.elapsed().as_secs_f64();

        let stage = Instant::now();
        let segments = self
            .transcription_engine
            .transcribe(&audio_path)
            .await
            .map_err(PipelineError::Transcription)?;
        let transcription = stage.elapsed().as_secs_f64();
        tracing::debug!(segments = segments.len(), "Transcription produced segments");

        let stage = Instant::now();
        let translated = self
            .translator
            .translate_all(&segments, &self.target_language)
            .await
            .map_err(PipelineError::Translation)?;
        let translation = stage.elapsed().as_secs_f64();

        let stage = Instant::now();
        tokio::fs::write(&srt_path, render_srt(&translated))
            .await
            .map_err(PipelineError::SubtitleWrite)?;
        let srt_generation = stage.elapsed().as_secs_f64();

        let stage = Instant::now();
        tokio::fs::remove_file(&audio_path)
            .await
            .map_err(PipelineError::Cleanup)?;
        let cleanup = stage.elapsed().as_secs_f64();

        let timing = StageTimings {
            audio_extraction,
            transcription,
            translation,
            srt_generation,
            cleanup,
            total: total_start.elapsed().as_secs_f64(),
        };

        Ok((srt_path.display().to_string(), timing))
    }
}

/// Sibling scratch file, `<stem>_temp.wav` beside the source video.
fn scratch_audio_path(video_path: &Path) -> PathBuf {
    let stem = video_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    video_path.with_file_name(format!("{}_temp.wav", stem))
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Video file not found at {0}")]
    VideoNotFound(String),
    #[error("audio extraction: {0}")]
    AudioExtraction(AudioExtractorError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("translation: {0}")]
    Translation(TranslationError),
    #[error("subtitle generation: {0}")]
    SubtitleWrite(std::io::Error),
    #[error("scratch cleanup: {0}")]
    Cleanup(std::io::Error),
}
