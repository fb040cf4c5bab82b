pub mod anthropic;
pub mod models;
pub mod openai;

use anthropic::AnthropicProvider;
use openai::OpenAiProvider;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::config::AppConfig;
use models::{ChatOptions, ChatResponse, Message};

/// Provider failures are opaque upstream strings; they are wrapped here,
/// never inspected for machine-readable codes.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("API Error: {0}")]
    Api(String),
    #[error("Invalid Response")]
    InvalidResponse,
    #[error("Rate Limited")]
    RateLimited,
    #[error("Request Timed Out")]
    Timeout,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn chat(
        &self,
        messages: &[Message],
        options: ChatOptions,
    ) -> Result<ChatResponse, LlmError>;
}

/// Initializes the configured provider. A missing or empty credential yields
/// `None`; the process keeps serving and provider-dependent operations fail
/// with a configuration error instead.
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_default(config: &AppConfig) -> Option<Arc<dyn LlmProvider>> {
        let provider_name = config.llm.provider.as_str();

        match provider_name {
            "anthropic" => {
                let cfg = config.llm.anthropic.as_ref()?;
                if cfg.api_key.is_empty() {
                    warn!("Anthropic provider selected but no API key configured");
                    return None;
                }
                Some(Arc::new(AnthropicProvider::new(
                    cfg.api_key.clone(),
                    cfg.api_base.clone(),
                    cfg.default_model.clone(),
                )))
            }
            "openai" => {
                let cfg = config.llm.openai.as_ref()?;
                if cfg.api_key.is_empty() {
                    warn!("OpenAI provider selected but no API key configured");
                    return None;
                }
                Some(Arc::new(OpenAiProvider::new(
                    cfg.api_key.clone(),
                    cfg.api_base.clone(),
                    cfg.default_model.clone(),
                )))
            }
            other => {
                warn!("Unknown LLM provider '{}' in config", other);
                None
            }
        }
    }
}
