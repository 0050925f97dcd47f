use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            ProductError::BarcodeEmpty => "product.barcode_empty",
            ProductError::BarcodeInvalid => "product.barcode_invalid",
            ProductError::InvalidDate => "product.invalid_date",
        };

        (StatusCode::BAD_REQUEST, ErrorResponse::validation(message))
    }
}
