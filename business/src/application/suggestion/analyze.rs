use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{AdvisoryPolicy, Suggestion};
use crate::domain::suggestion::prompt::build_prompt;
use crate::domain::suggestion::schema::{parse_suggestions, suggestion_list_schema};
use crate::domain::suggestion::services::{CompletionError, TextCompletionService};
use crate::domain::suggestion::use_cases::analyze::{
    AnalyzeExpirationsParams, AnalyzeExpirationsUseCase,
};

pub struct AnalyzeExpirationsUseCaseImpl {
    pub completion: Arc<dyn TextCompletionService>,
    pub policy: AdvisoryPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeExpirationsUseCase for AnalyzeExpirationsUseCaseImpl {
    async fn execute(
        &self,
        params: AnalyzeExpirationsParams,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        if params.products.is_empty() {
            self.logger
                .info("No products to analyze, skipping model request");
            return Ok(vec![]);
        }

        self.logger.info(&format!(
            "Analyzing expirations for {} products",
            params.products.len()
        ));

        let prompt = build_prompt(&params.products, &params.business_rules, &self.policy);
        let schema = suggestion_list_schema();

        let payload = self
            .completion
            .complete(&prompt, &schema)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Expiration analysis failed: {}", err));
                match err {
                    CompletionError::RequestFailed => SuggestionError::AnalysisRequestFailed,
                    CompletionError::EmptyResponse | CompletionError::MalformedResponse => {
                        SuggestionError::AnalysisOutputInvalid
                    }
                }
            })?;

        let suggestions = parse_suggestions(payload).inspect_err(|err| {
            self.logger
                .error(&format!("Model output rejected: {}", err));
        })?;

        self.logger
            .info(&format!("Generated {} suggestions", suggestions.len()));

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::value_objects::ExpirationDate;
    use crate::domain::suggestion::model::BusinessRules;
    use mockall::mock;
    use serde_json::{Value, json};

    mock! {
        pub Completion {}

        #[async_trait]
        impl TextCompletionService for Completion {
            async fn complete(
                &self,
                prompt: &str,
                output_schema: &Value,
            ) -> Result<Value, CompletionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(barcode: &str, date: &str, quantity: u32) -> Product {
        Product::new(NewProductProps {
            address: "Aisle 1".to_string(),
            barcode: barcode.to_string(),
            quantity,
            expiration_date: ExpirationDate::parse(date).unwrap(),
            placement: None,
        })
        .unwrap()
    }

    fn use_case(completion: MockCompletion) -> AnalyzeExpirationsUseCaseImpl {
        AnalyzeExpirationsUseCaseImpl {
            completion: Arc::new(completion),
            policy: AdvisoryPolicy::default(),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_empty_without_calling_model_when_no_products() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().never();

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![],
                business_rules: "discount everything".into(),
            })
            .await;

        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn should_return_suggestions_when_model_answers_with_valid_payload() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .times(1)
            .returning(|_, _| {
                Ok(json!([
                    {"barcode": "123", "suggestedAction": "remove from shelf", "reason": "expired"}
                ]))
            });

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5)],
                business_rules: BusinessRules::none(),
            })
            .await;

        let suggestions = result.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].barcode, "123");
        assert_eq!(suggestions[0].suggested_action, "remove from shelf");
    }

    #[tokio::test]
    async fn should_send_prompt_and_declared_schema_to_model() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .withf(|prompt, schema| {
                prompt.contains("123, 20240101, 5")
                    && prompt.contains("No discounts on Sundays.")
                    && schema["items"]["required"] == suggestion_list_schema()["items"]["required"]
            })
            .returning(|_, _| Ok(json!([])));

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5)],
                business_rules: "No discounts on Sundays.".into(),
            })
            .await;

        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn should_accept_suggestions_that_do_not_match_input_cardinality() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().returning(|_, _| {
            Ok(json!([
                {"barcode": "123", "suggestedAction": "discount", "reason": "a"},
                {"barcode": "999", "suggestedAction": "remove", "reason": "b"},
                {"barcode": "123", "suggestedAction": "remove", "reason": "c"}
            ]))
        });

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5), product("456", "2024-01-02", 1)],
                business_rules: BusinessRules::none(),
            })
            .await;

        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_fail_whole_call_when_one_entry_lacks_reason() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().returning(|_, _| {
            Ok(json!([
                {"barcode": "123", "suggestedAction": "discount", "reason": "soon"},
                {"barcode": "456", "suggestedAction": "discount"}
            ]))
        });

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5), product("456", "2024-01-02", 1)],
                business_rules: BusinessRules::none(),
            })
            .await;

        assert_eq!(result, Err(SuggestionError::AnalysisOutputInvalid));
    }

    #[tokio::test]
    async fn should_report_request_failure() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .times(1)
            .returning(|_, _| Err(CompletionError::RequestFailed));

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5)],
                business_rules: BusinessRules::none(),
            })
            .await;

        assert_eq!(result, Err(SuggestionError::AnalysisRequestFailed));
    }

    #[tokio::test]
    async fn should_report_invalid_output_when_model_returns_nothing() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_, _| Err(CompletionError::EmptyResponse));

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5)],
                business_rules: BusinessRules::none(),
            })
            .await;

        assert_eq!(result, Err(SuggestionError::AnalysisOutputInvalid));
    }

    #[tokio::test]
    async fn should_report_invalid_output_when_model_returns_garbage() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_, _| Err(CompletionError::MalformedResponse));

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5)],
                business_rules: BusinessRules::none(),
            })
            .await;

        assert_eq!(result, Err(SuggestionError::AnalysisOutputInvalid));
    }

    #[tokio::test]
    async fn should_report_invalid_output_when_model_returns_null() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_, _| Ok(Value::Null));

        let result = use_case(completion)
            .execute(AnalyzeExpirationsParams {
                products: vec![product("123", "2024-01-01", 5)],
                business_rules: BusinessRules::none(),
            })
            .await;

        assert_eq!(result, Err(SuggestionError::AnalysisOutputInvalid));
    }

    #[tokio::test]
    async fn should_not_mix_results_between_concurrent_calls() {
        // Echoes back one suggestion per barcode found in the prompt.
        let mut completion = MockCompletion::new();
        completion.expect_complete().returning(|prompt, _| {
            let entries: Vec<Value> = ["111", "222", "333", "444"]
                .iter()
                .filter(|barcode| prompt.contains(&format!("{}, ", barcode)))
                .map(|barcode| {
                    json!({"barcode": barcode, "suggestedAction": "discount", "reason": "soon"})
                })
                .collect();
            Ok(Value::Array(entries))
        });
        let use_case = Arc::new(use_case(completion));

        let first = {
            let use_case = use_case.clone();
            tokio::spawn(async move {
                use_case
                    .execute(AnalyzeExpirationsParams {
                        products: vec![product("111", "2024-01-01", 1), product("222", "2024-01-01", 1)],
                        business_rules: BusinessRules::none(),
                    })
                    .await
            })
        };
        let second = {
            let use_case = use_case.clone();
            tokio::spawn(async move {
                use_case
                    .execute(AnalyzeExpirationsParams {
                        products: vec![product("333", "2024-01-01", 1), product("444", "2024-01-01", 1)],
                        business_rules: BusinessRules::none(),
                    })
                    .await
            })
        };

        let first: Vec<String> = first
            .await
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|s| s.barcode)
            .collect();
        let second: Vec<String> = second
            .await
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|s| s.barcode)
            .collect();

        assert_eq!(first, vec!["111", "222"]);
        assert_eq!(second, vec!["333", "444"]);
    }
}
