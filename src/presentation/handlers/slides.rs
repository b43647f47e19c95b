use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::DocumentProcessor;
use crate::domain::{Deck, DeckStyle};
use crate::infrastructure::observability::{TracingProgress, sanitize_prompt};
use crate::presentation::state::AppState;

use super::error::generation_error_response;

#[derive(Deserialize)]
pub struct SlidesRequest {
    pub text: String,
    pub style: Option<DeckStyle>,
    pub use_mock: Option<bool>,
    pub api_key: Option<String>,
}

#[derive(Serialize)]
pub struct SlidesResponse {
    /// True when the deck came from local heuristics rather than a model.
    pub mock: bool,
    #[serde(flatten)]
    pub deck: Deck,
}

#[tracing::instrument(skip(state, request))]
pub async fn slides_handler<D>(
    State(state): State<AppState<D>>,
    Json(request): Json<SlidesRequest>,
) -> impl IntoResponse
where
    D: DocumentProcessor + 'static + ?Sized,
{
    tracing::debug!(text = %sanitize_prompt(&request.text), "Processing slide generation");

    let options = state.options_for(request.style, request.use_mock, request.api_key);
    let progress = TracingProgress::new("slides");

    match state
        .generation_service
        .generate_slides(&request.text, &options, &progress)
        .await
    {
        Ok(deck) => (
            StatusCode::OK,
            Json(SlidesResponse {
                mock: options.wants_mock(),
                deck,
            }),
        )
            .into_response(),
        Err(e) => generation_error_response(&e),
    }
}
