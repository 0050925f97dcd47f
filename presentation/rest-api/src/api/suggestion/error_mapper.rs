use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            SuggestionError::AnalysisRequestFailed => "suggestion.analysis_request_failed",
            SuggestionError::AnalysisOutputInvalid => "suggestion.analysis_output_invalid",
        };

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                name: "AnalysisFailed".to_string(),
                message: message.to_string(),
            }),
        )
    }
}
