use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioExtractor, TranscriptionEngine, TranslationClient};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    /// Path relative to the configured video root.
    pub video_path: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub task_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a subtitle-generation job and returns its id immediately; the
/// pipeline runs off the request path and is observed by polling.
#[tracing::instrument(skip(state, request))]
pub async fn generate_subtitles_handler<A, T, L>(
    State(state): State<AppState<A, T, L>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse
where
    A: AudioExtractor + 'static,
    T: TranscriptionEngine + 'static,
    L: TranslationClient + 'static,
{
    let pipeline = Arc::clone(&state.pipeline_service);
    match pipeline.submit(request.video_path.clone()).await {
        Ok(task_id) => {
            tracing::info!(
                task_id = %task_id,
                video_path = %request.video_path,
                "Subtitle generation job accepted"
            );
            (
                StatusCode::ACCEPTED,
                Json(GenerateResponse {
                    task_id: task_id.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create job record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create job: {}", e),
                }),
            )
                .into_response()
        }
    }
}
