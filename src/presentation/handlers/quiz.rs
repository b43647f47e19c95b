use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::DocumentProcessor;
use crate::domain::QuizQuestion;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::generation_error_response;

#[derive(Deserialize)]
pub struct QuizRequest {
    pub transcript: String,
    pub count: Option<usize>,
    pub use_mock: Option<bool>,
    pub api_key: Option<String>,
}

#[derive(Serialize)]
pub struct QuizResponse {
    /// True when questions come from templates with placeholder answer keys.
    pub mock: bool,
    pub questions: Vec<QuizQuestion>,
}

#[tracing::instrument(skip(state, request))]
pub async fn quiz_handler<D>(
    State(state): State<AppState<D>>,
    Json(request): Json<QuizRequest>,
) -> impl IntoResponse
where
    D: DocumentProcessor + 'static + ?Sized,
{
    tracing::debug!(transcript = %sanitize_prompt(&request.transcript), "Processing quiz generation");

    let mut options = state.options_for(None, request.use_mock, request.api_key);
    if let Some(count) = request.count {
        options.quiz_questions = count;
    }

    match state
        .generation_service
        .generate_quiz(&request.transcript, &options)
        .await
    {
        Ok(questions) => (
            StatusCode::OK,
            Json(QuizResponse {
                mock: options.wants_mock(),
                questions,
            }),
        )
            .into_response(),
        Err(e) => generation_error_response(&e),
    }
}
