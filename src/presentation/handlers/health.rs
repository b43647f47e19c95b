use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::DocumentProcessor;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `mock` when requests without overrides are served by local heuristics.
    pub generation_mode: &'static str,
}

pub async fn health_handler<D>(State(state): State<AppState<D>>) -> impl IntoResponse
where
    D: DocumentProcessor + 'static + ?Sized,
{
    let generation_mode = if state.settings.generation.options().wants_mock() {
        "mock"
    } else {
        "live"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            generation_mode,
        }),
    )
}
