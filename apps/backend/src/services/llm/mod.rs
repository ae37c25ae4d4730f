//! Completion providers.
//!
//! Every provider answers a single-turn prompt with completion text. The
//! router picks the provider for a model from its name prefix.

pub mod anthropic;
pub mod openai;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use cardgen_core::ProviderKind;
use reqwest::Client;

use crate::config::Config;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;

/// Errors from completion requests.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(&'static str),
}

/// Single-turn completion backend.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, LlmError>;
}

/// Dispatches each request to the provider that serves its model.
#[derive(Default)]
pub struct LlmRouter {
    providers: HashMap<ProviderKind, Box<dyn CompletionService>>,
}

impl LlmRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the backend for a provider family, replacing any previous one.
    pub fn with_provider(
        mut self,
        kind: ProviderKind,
        provider: impl CompletionService + 'static,
    ) -> Self {
        self.providers.insert(kind, Box::new(provider));
        self
    }

    /// Build clients for every provider that has an API key configured.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let client = http_client(config.llm_timeout)?;
        let mut router = Self::new();

        if let Some(key) = &config.openai.api_key {
            router = router.with_provider(
                ProviderKind::OpenAi,
                OpenAiClient::openai(client.clone(), key.clone(), config.openai.base_url.clone()),
            );
        }
        if let Some(key) = &config.perplexity.api_key {
            router = router.with_provider(
                ProviderKind::Perplexity,
                OpenAiClient::perplexity(
                    client.clone(),
                    key.clone(),
                    config.perplexity.base_url.clone(),
                ),
            );
        }
        if let Some(key) = &config.anthropic.api_key {
            router = router.with_provider(
                ProviderKind::Anthropic,
                AnthropicClient::new(client, key.clone(), config.anthropic.base_url.clone()),
            );
        }

        let mut configured: Vec<&str> = router.configured().iter().map(|k| k.as_str()).collect();
        configured.sort_unstable();
        tracing::info!("Configured completion providers: {:?}", configured);
        Ok(router)
    }

    pub fn is_configured(&self, kind: ProviderKind) -> bool {
        self.providers.contains_key(&kind)
    }

    /// Providers with a registered backend.
    pub fn configured(&self) -> Vec<ProviderKind> {
        self.providers.keys().copied().collect()
    }
}

#[async_trait]
impl CompletionService for LlmRouter {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        let kind = ProviderKind::for_model(model);
        let provider = self
            .providers
            .get(&kind)
            .ok_or(LlmError::NotConfigured(kind.as_str()))?;

        tracing::debug!(model, provider = kind.as_str(), "requesting completion");
        provider.complete(prompt, model).await
    }
}

fn http_client(timeout: Duration) -> Result<Client, LlmError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Map non-success statuses to errors, shared by all providers.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = resp.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = resp
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return Err(LlmError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(LlmError::Auth("Invalid API key".to_string()));
    }

    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(resp)
}
