//! OpenAI chat completions client.
//!
//! Perplexity exposes the same API and reuses this client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::{check_status, CompletionService, LlmError};

const PERPLEXITY_TEMPERATURE: f64 = 0.2;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    temperature: Option<f64>,
}

impl OpenAiClient {
    pub fn openai(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
            temperature: None,
        }
    }

    pub fn perplexity(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
            temperature: Some(PERPLEXITY_TEMPERATURE),
        }
    }

    fn build_request(&self, prompt: &str, model: &str) -> Value {
        let mut body = json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }
}

/// Pull the first choice's message text out of a response body.
fn completion_content(json: &Value) -> Result<String, LlmError> {
    json["choices"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|c| c["message"]["content"].as_str())
        .map(str::to_string)
        .ok_or_else(|| LlmError::InvalidResponse("Missing content".to_string()))
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.build_request(prompt, model))
            .send()
            .await?;

        let json: Value = check_status(resp).await?.json().await?;
        completion_content(&json)
    }
}
