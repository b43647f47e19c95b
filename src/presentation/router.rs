use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::DocumentProcessor;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, health_handler, quiz_handler, slides_handler, upload_slides_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<D>(state: AppState<D>) -> Router
where
    D: DocumentProcessor + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = state.settings.server.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler::<D>))
        .route("/api/v1/analyze", post(analyze_handler::<D>))
        .route("/api/v1/slides", post(slides_handler::<D>))
        .route("/api/v1/quiz", post(quiz_handler::<D>))
        .route(
            "/api/v1/documents/slides",
            post(upload_slides_handler::<D>),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
