use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{BusinessRules, Suggestion};

pub struct AnalyzeExpirationsParams {
    pub products: Vec<Product>,
    pub business_rules: BusinessRules,
}

#[async_trait]
pub trait AnalyzeExpirationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AnalyzeExpirationsParams,
    ) -> Result<Vec<Suggestion>, SuggestionError>;
}
