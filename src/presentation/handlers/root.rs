use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub submit: String,
    pub status: String,
}

/// Liveness and discovery endpoint.
pub async fn root_handler() -> impl IntoResponse {
    Json(RootResponse {
        message: "Subtitle Generator API".to_string(),
        submit: "POST /generate-subtitles".to_string(),
        status: "GET /task/{task_id}".to_string(),
    })
}
