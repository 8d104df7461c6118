use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{AudioExtractor, TranscriptionEngine, TranslationClient};
use crate::domain::{JobId, StageTimings};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TaskStatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srt_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<StageTimings>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns the current snapshot of a job. Ids unknown to the store, which
/// includes malformed ones, get a 404.
#[tracing::instrument(skip(state))]
pub async fn task_status_handler<A, T, L>(
    State(state): State<AppState<A, T, L>>,
    Path(task_id): Path<String>,
) -> impl IntoResponse
where
    A: AudioExtractor + 'static,
    T: TranscriptionEngine + 'static,
    L: TranslationClient + 'static,
{
    let Ok(uuid) = Uuid::parse_str(&task_id) else {
        return not_found(&task_id);
    };

    match state.job_store.get(JobId::from_uuid(uuid)).await {
        Ok(Some(job)) => {
            let response = TaskStatusResponse {
                status: job.status.as_str().to_string(),
                srt_path: job.srt_path,
                error: job.error_message,
                timing: job.timing,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => not_found(&task_id),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch task status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch task: {}", e),
                }),
            )
                .into_response()
        }
    }
}

fn not_found(task_id: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Task not found: {}", task_id),
        }),
    )
        .into_response()
}
