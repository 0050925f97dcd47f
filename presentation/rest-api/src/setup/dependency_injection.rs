use std::sync::Arc;

use logger::TracingLogger;

use openai::client::OpenAIClient;
use openai::text_completion::TextCompletionOpenAI;

use business::application::product::classify::ClassifyProductsUseCaseImpl;
use business::application::suggestion::analyze::AnalyzeExpirationsUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::store::routes::StoreApi;
use crate::api::suggestion::routes::SuggestionApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub store_api: StoreApi,
    pub suggestion_api: SuggestionApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let openai_client = OpenAIClient::new(config.openai.client_config());
        let text_completion = Arc::new(TextCompletionOpenAI::new(openai_client));

        // Product use cases
        let classify_use_case = Arc::new(ClassifyProductsUseCaseImpl {
            policy: config.advisory.classification_policy(),
            logger: logger.clone(),
        });

        // Suggestion use cases
        let analyze_use_case = Arc::new(AnalyzeExpirationsUseCaseImpl {
            completion: text_completion,
            policy: config.advisory.advisory_policy(),
            logger,
        });

        Self {
            health_api: HealthApi,
            product_api: ProductApi::new(classify_use_case.clone()),
            store_api: StoreApi::new(classify_use_case),
            suggestion_api: SuggestionApi::new(analyze_use_case),
        }
    }
}
