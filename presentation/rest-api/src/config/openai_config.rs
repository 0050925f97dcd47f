use std::env;
use std::time::Duration;

use anyhow::Context;
use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAIClientConfig};

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API key (required)
/// - OPENAI_MODEL: Chat model (default: "gpt-4o-mini")
/// - OPENAI_BASE_URL: API base URL (default: "https://api.openai.com/v1")
/// - OPENAI_TIMEOUT_SECS: Request timeout in seconds (default: none)
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl OpenAIConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY environment variable must be set")?;
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match env::var("OPENAI_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }

    pub fn client_config(&self) -> OpenAIClientConfig {
        OpenAIClientConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            timeout: self.timeout,
        }
    }
}

fn parse_timeout(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("OPENAI_TIMEOUT_SECS must be a whole number, got '{}'", raw))?;
    Ok(Duration::from_secs(secs))
}
