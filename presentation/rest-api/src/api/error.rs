use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            name: "ValidationError".to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
