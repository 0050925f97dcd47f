use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};

use business::domain::suggestion::services::{CompletionError, TextCompletionService};

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are an assistant for store staff managing perishable inventory.
You recommend concrete shelf actions (discount, remove from shelf, keep) for products based on their expiration dates.

Core principles:
- Only use the products you are given; never invent barcodes
- Keep reasons short and factual (mention how many days are left or how long ago it expired)
- Business rules supplied by the store take precedence over general advice

Answer only with JSON matching the requested schema."#;

/// Key of the envelope object wrapped around the declared output shape.
/// Structured outputs require an object at the schema root.
const ENVELOPE_KEY: &str = "suggestions";

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^```(?:json)?\s*([\s\S]*?)\s*```$").expect("code fence pattern is valid")
});

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// [`TextCompletionService`] backed by the OpenAI Chat Completions API.
pub struct TextCompletionOpenAI {
    client: OpenAIClient,
}

impl TextCompletionOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(&self, prompt: &str, output_schema: &Value) -> Value {
        json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": 0.2,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "structured_output",
                    "strict": true,
                    "schema": {
                        "type": "object",
                        "properties": { ENVELOPE_KEY: output_schema },
                        "required": [ENVELOPE_KEY],
                        "additionalProperties": false
                    }
                }
            }
        })
    }

    fn strip_code_fence(content: &str) -> &str {
        let trimmed = content.trim();
        match CODE_FENCE.captures(trimmed).and_then(|caps| caps.get(1)) {
            Some(inner) => inner.as_str(),
            None => trimmed,
        }
    }

    /// Decodes message content and unwraps the envelope.
    ///
    /// A bare top-level value (no envelope) is accepted as-is for models that
    /// ignore the response format.
    fn parse_content(content: &str) -> Result<Value, CompletionError> {
        let json_text = Self::strip_code_fence(content);
        if json_text.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        let parsed: Value =
            serde_json::from_str(json_text).map_err(|_| CompletionError::MalformedResponse)?;

        let value = match parsed {
            Value::Object(mut object) => object
                .remove(ENVELOPE_KEY)
                .ok_or(CompletionError::MalformedResponse)?,
            other => other,
        };

        if value.is_null() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(value)
    }
}

#[async_trait]
impl TextCompletionService for TextCompletionOpenAI {
    async fn complete(
        &self,
        prompt: &str,
        output_schema: &Value,
    ) -> Result<Value, CompletionError> {
        let body = self.build_body(prompt, output_schema);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| CompletionError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(CompletionError::RequestFailed);
        }

        let data: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|_| CompletionError::MalformedResponse)?;

        let content = data
            .choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(CompletionError::EmptyResponse)?;

        Self::parse_content(&content)
    }
}
