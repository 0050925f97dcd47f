use async_trait::async_trait;
use serde_json::Value;

/// Failures of the language-model boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompletionError {
    /// Network, auth, rate limit or timeout; no output was produced.
    #[error("completion.request_failed")]
    RequestFailed,
    /// The model answered without structured content.
    #[error("completion.empty_response")]
    EmptyResponse,
    /// The model answered with content that is not JSON of the declared shape.
    #[error("completion.malformed_response")]
    MalformedResponse,
}

/// Service port for a text-generation model that answers in structured data.
///
/// Implementations send `prompt` constrained by `output_schema` (JSON Schema)
/// and return the decoded JSON value. They do not retry and keep no state
/// between calls. Conformance to the schema is checked by the caller.
#[async_trait]
pub trait TextCompletionService: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        output_schema: &Value,
    ) -> Result<Value, CompletionError>;
}
