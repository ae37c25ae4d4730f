//! Model identifier to provider mapping.

use serde::{Deserialize, Serialize};

/// Default model when a request does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Model identifiers offered to callers, in display order.
pub const KNOWN_MODELS: &[&str] = &[
    "gpt-4o",
    "o1-preview",
    "o1-mini",
    "sonar-pro",
    "sonar",
    "sonar-reasoning",
    "claude-3-sonnet-20240229",
    "claude-3-opus-20240229",
    "claude-3-haiku-20240307",
];

/// Backend family that serves a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
    Perplexity,
}

impl ProviderKind {
    /// Pick the provider for a model by its name prefix.
    ///
    /// `claude*` is Anthropic, `sonar*` is Perplexity, anything else is
    /// served by the OpenAI API.
    pub fn for_model(model: &str) -> Self {
        if model.starts_with("claude") {
            Self::Anthropic
        } else if model.starts_with("sonar") {
            Self::Perplexity
        } else {
            Self::OpenAi
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Perplexity => "perplexity",
        }
    }
}

/// A model and the provider that serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub provider: ProviderKind,
}

/// Known models with their providers.
pub fn catalog() -> Vec<ModelInfo> {
    KNOWN_MODELS
        .iter()
        .map(|&id| ModelInfo {
            id,
            provider: ProviderKind::for_model(id),
        })
        .collect()
}
