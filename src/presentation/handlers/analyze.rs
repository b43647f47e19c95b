use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::DocumentProcessor;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::generation_error_response;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler<D>(
    State(state): State<AppState<D>>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse
where
    D: DocumentProcessor + 'static + ?Sized,
{
    tracing::debug!(text = %sanitize_prompt(&request.text), "Analyzing content");

    match state.generation_service.analyze(&request.text) {
        Ok(extracted) => (StatusCode::OK, Json(extracted)).into_response(),
        Err(e) => generation_error_response(&e),
    }
}
