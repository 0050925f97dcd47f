use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, RawProduct};
use business::domain::suggestion::use_cases::analyze::{
    AnalyzeExpirationsParams, AnalyzeExpirationsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{AnalyzeExpirationsRequest, SuggestionResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    analyze_use_case: Arc<dyn AnalyzeExpirationsUseCase>,
}

impl SuggestionApi {
    pub fn new(analyze_use_case: Arc<dyn AnalyzeExpirationsUseCase>) -> Self {
        Self { analyze_use_case }
    }
}

/// Suggestion API
///
/// Endpoints for AI-generated shelf actions on perishable products.
#[OpenApi]
impl SuggestionApi {
    /// Suggest shelf actions
    ///
    /// Asks the language model for discount or removal suggestions for the
    /// given products. Suggestions are not guaranteed to cover every product
    /// nor to be one per barcode.
    #[oai(path = "/suggestions", method = "post", tag = "ApiTags::Suggestions")]
    async fn analyze_expirations(
        &self,
        body: Json<AnalyzeExpirationsRequest>,
    ) -> AnalyzeExpirationsResponse {
        let products: Result<Vec<Product>, ProductError> = body
            .0
            .products
            .into_iter()
            .map(|p| RawProduct::from(p).into_product())
            .collect();

        let products = match products {
            Ok(products) => products,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return AnalyzeExpirationsResponse::BadRequest(json);
            }
        };

        let params = AnalyzeExpirationsParams {
            products,
            business_rules: body.0.business_rules.into(),
        };

        match self.analyze_use_case.execute(params).await {
            Ok(suggestions) => {
                let responses: Vec<SuggestionResponse> =
                    suggestions.into_iter().map(|s| s.into()).collect();
                AnalyzeExpirationsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                AnalyzeExpirationsResponse::BadGateway(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AnalyzeExpirationsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SuggestionResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
