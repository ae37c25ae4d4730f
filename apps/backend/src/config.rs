//! Service configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use cardgen_core::DEFAULT_MODEL;
use thiserror::Error;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const PERPLEXITY_BASE_URL: &str = "https://api.perplexity.ai";
const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Credentials and endpoint for one completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_model: String,
    pub openai: ProviderConfig,
    pub anthropic: ProviderConfig,
    pub perplexity: ProviderConfig,
    pub deck_output_dir: PathBuf,
    pub llm_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Recognised variables:
    /// - HOST, PORT: listen address (default 0.0.0.0:3000)
    /// - DEFAULT_MODEL: model used when a request names none
    /// - OPENAI_API_KEY, ANTHROPIC_API_KEY, PERPLEXITY_API_KEY
    /// - OPENAI_BASE_URL, ANTHROPIC_BASE_URL, PERPLEXITY_BASE_URL
    /// - DECK_OUTPUT_DIR: where deck files are written (default ./decks)
    /// - LLM_TIMEOUT_SECS: completion request timeout (default 300)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port: u16 = match var("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => 3000,
        };

        let timeout_secs: u64 = match var("LLM_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "LLM_TIMEOUT_SECS",
                value,
            })?,
            None => 300,
        };

        let provider = |key: &str, url: &str, default_url: &str| ProviderConfig {
            api_key: var(key),
            base_url: var(url).unwrap_or_else(|| default_url.to_string()),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            default_model: var("DEFAULT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai: provider("OPENAI_API_KEY", "OPENAI_BASE_URL", OPENAI_BASE_URL),
            anthropic: provider("ANTHROPIC_API_KEY", "ANTHROPIC_BASE_URL", ANTHROPIC_BASE_URL),
            perplexity: provider("PERPLEXITY_API_KEY", "PERPLEXITY_BASE_URL", PERPLEXITY_BASE_URL),
            deck_output_dir: var("DECK_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("decks")),
            llm_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
