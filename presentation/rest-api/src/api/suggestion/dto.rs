use poem_openapi::Object;

use business::domain::suggestion::model::Suggestion;

use crate::api::product::dto::ProductRequest;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AnalyzeExpirationsRequest {
    pub products: Vec<ProductRequest>,
    /// Free-text store policy forwarded to the model
    #[oai(skip_serializing_if_is_none)]
    pub business_rules: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct SuggestionResponse {
    /// Barcode the suggestion refers to
    pub barcode: String,
    /// Proposed action, e.g. "discount 50%" or "remove from shelf"
    pub suggested_action: String,
    pub reason: String,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(s: Suggestion) -> Self {
        Self {
            barcode: s.barcode,
            suggested_action: s.suggested_action,
            reason: s.reason,
        }
    }
}
