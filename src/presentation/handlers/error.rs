use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{DocumentProcessorError, GenerationError, LlmClientError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &GenerationError) -> StatusCode {
    match error {
        GenerationError::EmptyInput
        | GenerationError::DegenerateSegmentation
        | GenerationError::InsufficientContent(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GenerationError::DocumentProcessing(DocumentProcessorError::UnsupportedContentType(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        GenerationError::DocumentProcessing(DocumentProcessorError::ExtractionFailed(_)) => {
            StatusCode::BAD_REQUEST
        }
        GenerationError::Completion(LlmClientError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        GenerationError::Completion(_) | GenerationError::InvalidModelResponse(_) => {
            StatusCode::BAD_GATEWAY
        }
        GenerationError::InvalidQuestion(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn generation_error_response(error: &GenerationError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(error = %error, "Generation failed");
    } else {
        tracing::warn!(error = %error, "Generation rejected");
    }
    error_response(status, error.to_string())
}
