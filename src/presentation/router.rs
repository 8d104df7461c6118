use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioExtractor, TranscriptionEngine, TranslationClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    generate_subtitles_handler, health_handler, root_handler, task_status_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<A, T, L>(state: AppState<A, T, L>) -> Router
where
    A: AudioExtractor + 'static,
    T: TranscriptionEngine + 'static,
    L: TranslationClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route(
            "/generate-subtitles",
            post(generate_subtitles_handler::<A, T, L>),
        )
        .route("/task/{task_id}", get(task_status_handler::<A, T, L>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
