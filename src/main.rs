use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use subgen::application::ports::JobStore;
use subgen::application::services::{BatchTranslator, PipelineService};
use subgen::infrastructure::llm::OpenAiTranslator;
use subgen::infrastructure::media::FfmpegAudioExtractor;
use subgen::infrastructure::observability::{init_tracing, TracingConfig};
use subgen::infrastructure::store::InMemoryJobStore;
use subgen::infrastructure::transcription::WhisperApiEngine;
use subgen::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let audio_extractor = Arc::new(FfmpegAudioExtractor::new(
        settings.media.ffmpeg_binary.clone(),
    ));
    let transcription_engine = Arc::new(WhisperApiEngine::new(
        settings.transcription.endpoint.clone(),
        settings.transcription.api_key.clone(),
        settings.transcription.model.clone(),
        settings.transcription.language.clone(),
    ));
    let translation_client = Arc::new(OpenAiTranslator::new(
        settings.translation.api_key.clone(),
        settings.translation.base_url.clone(),
        settings.translation.model.clone(),
    ));
    let translator = Arc::new(BatchTranslator::new(
        translation_client,
        settings.translation.batch_size,
    ));
    let job_store = Arc::new(InMemoryJobStore::new());

    let pipeline_service = Arc::new(PipelineService::new(
        audio_extractor,
        transcription_engine,
        translator,
        job_store as Arc<dyn JobStore>,
        settings.media.video_root.clone(),
        settings.translation.target_language.clone(),
    ));

    let state = AppState {
        job_store: pipeline_service.job_store(),
        pipeline_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
