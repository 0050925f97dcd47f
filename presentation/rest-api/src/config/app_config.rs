use super::{
    advisory_config::AdvisoryConfig, cors_config, openai_config::OpenAIConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub openai: OpenAIConfig,
    pub advisory: AdvisoryConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            openai: OpenAIConfig::from_env()?,
            advisory: AdvisoryConfig::from_env(),
        })
    }
}
