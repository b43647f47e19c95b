use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::DocumentProcessor;
use crate::domain::{ContentType, DeckStyle};
use crate::infrastructure::observability::TracingProgress;
use crate::presentation::state::AppState;

use super::error::{error_response, generation_error_response};
use super::slides::SlidesResponse;

#[derive(Deserialize)]
pub struct UploadParams {
    pub style: Option<DeckStyle>,
    pub use_mock: Option<bool>,
}

#[tracing::instrument(skip(state, params, multipart))]
pub async fn upload_slides_handler<D>(
    State(state): State<AppState<D>>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    D: DocumentProcessor + 'static + ?Sized,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type_str = field
        .content_type()
        .unwrap_or("text/plain")
        .to_string();

    tracing::debug!(filename = %filename, content_type = %content_type_str, "Processing file upload");

    let Some(content_type) = ContentType::from_mime(&content_type_str) else {
        tracing::warn!(content_type = %content_type_str, "Unsupported content type");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Unsupported content type: {}", content_type_str),
        );
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    let max_bytes = state.settings.server.max_upload_mb * 1024 * 1024;
    if data.len() > max_bytes {
        tracing::warn!(bytes = data.len(), max_bytes, "Upload too large");
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("File exceeds {} MB", state.settings.server.max_upload_mb),
        );
    }

    let options = state.options_for(params.style, params.use_mock, None);
    let progress = TracingProgress::new("document_slides");

    match state
        .generation_service
        .generate_from_document(&data, filename, content_type, &options, &progress)
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
