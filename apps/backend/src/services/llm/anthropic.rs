//! Anthropic messages API client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::{check_status, CompletionService, LlmError};

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

pub struct AnthropicClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn build_request(&self, prompt: &str, model: &str) -> Value {
        json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
        })
    }
}

fn message_text(json: &Value) -> Result<String, LlmError> {
    json["content"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|c| c["text"].as_str())
        .map(str::to_string)
        .ok_or_else(|| LlmError::InvalidResponse("Missing content".to_string()))
}

#[async_trait]
impl CompletionService for AnthropicClient {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        let url = format!("{}/messages", self.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&self.build_request(prompt, model))
            .send()
            .await?;

        let json: Value = check_status(resp).await?.json().await?;
        message_text(&json)
    }
}
