use axum::http::StatusCode;

use lectern::application::ports::GenerationError;
use lectern::presentation::handlers::status_for;

#[test]
fn given_invalid_model_response_when_mapping_status_then_returns_bad_gateway() {
    let error = GenerationError::InvalidModelResponse("correct answer out of range".to_string());

    assert_eq!(status_for(&error), StatusCode::BAD_GATEWAY);
}

#[test]
fn given_input_errors_when_mapping_status_then_returns_unprocessable() {
    assert_eq!(
        status_for(&GenerationError::EmptyInput),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        status_for(&GenerationError::DegenerateSegmentation),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}
