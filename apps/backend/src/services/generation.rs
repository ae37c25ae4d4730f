//! Card generation: prompt, completion request, then parsing on a blocking
//! worker.

use std::sync::Arc;

use cardgen_core::{
    generate_cloze_items, generate_qa_pairs, CardKind, ClozeItem, Completion, Diagnostic,
    Generated, PromptTable, ProviderKind, QaPair,
};

use crate::error::{ApiError, Result};
use crate::services::llm::{CompletionService, LlmError};

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct Generation<T> {
    pub model: String,
    pub provider: ProviderKind,
    pub generated: Generated<T>,
}

/// Runs prompts through a completion service and parses the replies.
#[derive(Clone)]
pub struct GenerationService {
    completions: Arc<dyn CompletionService>,
    prompts: Arc<PromptTable>,
    default_model: String,
}

impl GenerationService {
    pub fn new(
        completions: Arc<dyn CompletionService>,
        prompts: Arc<PromptTable>,
        default_model: String,
    ) -> Self {
        Self {
            completions,
            prompts,
            default_model,
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Generate question/answer cards from `text`.
    pub async fn qa_pairs(
        &self,
        text: String,
        model: Option<String>,
        prompt: Option<String>,
    ) -> Result<Generation<QaPair>> {
        self.run(CardKind::Basic, text, model, prompt, generate_qa_pairs)
            .await
    }

    /// Generate cloze deletion cards from `text`.
    pub async fn cloze_items(
        &self,
        text: String,
        model: Option<String>,
        prompt: Option<String>,
    ) -> Result<Generation<ClozeItem>> {
        self.run(CardKind::Cloze, text, model, prompt, generate_cloze_items)
            .await
    }

    async fn run<T>(
        &self,
        kind: CardKind,
        text: String,
        model: Option<String>,
        prompt: Option<String>,
        parse: fn(Completion) -> Generated<T>,
    ) -> Result<Generation<T>>
    where
        T: Send + 'static,
    {
        let model = model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.default_model.clone());
        let provider = ProviderKind::for_model(&model);
        let rendered = self.prompts.render(kind, &text, prompt.as_deref())?;

        if text.trim().is_empty() {
            tracing::warn!("Empty source text, skipping {} generation", kind.as_str());
            return Ok(Generation {
                model,
                provider,
                generated: Generated::failed(Diagnostic::EmptyInput),
            });
        }

        let completion: Completion = match self.completions.complete(&rendered, &model).await {
            Ok(reply) => Ok(reply),
            Err(LlmError::NotConfigured(name)) => {
                return Err(ApiError::ProviderNotConfigured(name.to_string()))
            }
            Err(e) => Err(e.to_string()),
        };

        let generated = tokio::task::spawn_blocking(move || parse(completion)).await?;
        tracing::info!(
            model = %model,
            kind = kind.as_str(),
            records = generated.records.len(),
            dropped = generated.diagnostics.len(),
            "Generated cards"
        );

        Ok(Generation {
            model,
            provider,
            generated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replies with a canned completion and records the prompts it saw.
    struct Canned {
        reply: std::result::Result<String, String>,
        prompts: Mutex<Vec<(String, String)>>,
    }

    impl Canned {
        fn new(reply: std::result::Result<&str, &str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string).map_err(str::to_string),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionService for Canned {
        async fn complete(&self, prompt: &str, model: &str) -> std::result::Result<String, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), model.to_string()));
            self.reply
                .clone()
                .map_err(|message| LlmError::Api { status: 500, message })
        }
    }

    fn service(canned: Arc<Canned>) -> GenerationService {
        GenerationService::new(canned, Arc::new(PromptTable::default()), "gpt-4o".to_string())
    }

    #[tokio::test]
    async fn test_qa_generation_uses_default_model() {
        let canned = Canned::new(Ok("Q: What?\nA: That."));
        let generation = service(canned.clone())
            .qa_pairs("Some text.".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(generation.model, "gpt-4o");
        assert_eq!(generation.provider, ProviderKind::OpenAi);
        assert_eq!(generation.generated.records.len(), 1);

        let prompts = canned.prompts.lock().unwrap();
        assert!(prompts[0].0.contains("Some text."));
        assert_eq!(prompts[0].1, "gpt-4o");
    }

    #[tokio::test]
    async fn test_custom_prompt_and_model() {
        let canned = Canned::new(Ok("Text: {c1::x} y\nExtra: z"));
        let generation = service(canned.clone())
            .cloze_items(
                "body".to_string(),
                Some("claude-3-haiku-20240307".to_string()),
                Some("Cloze this: {text}".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(generation.provider, ProviderKind::Anthropic);
        assert_eq!(generation.generated.records[0].text, "{{c1::x}} y");
        assert_eq!(canned.prompts.lock().unwrap()[0].0, "Cloze this: body");
    }

    #[tokio::test]
    async fn test_empty_text_skips_completion() {
        let canned = Canned::new(Ok("Q: a\nA: b"));
        let generation = service(canned.clone())
            .qa_pairs("   ".to_string(), None, None)
            .await
            .unwrap();

        assert!(generation.generated.is_empty());
        assert_eq!(generation.generated.diagnostics, vec![Diagnostic::EmptyInput]);
        assert!(canned.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_becomes_diagnostic() {
        let canned = Canned::new(Err("overloaded"));
        let generation = service(canned)
            .qa_pairs("text".to_string(), None, None)
            .await
            .unwrap();

        assert!(generation.generated.is_empty());
        assert_eq!(
            generation.generated.diagnostics,
            vec![Diagnostic::UpstreamFailure {
                reason: "API error: 500 - overloaded".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_an_error() {
        struct Unconfigured;

        #[async_trait]
        impl CompletionService for Unconfigured {
            async fn complete(&self, _: &str, _: &str) -> std::result::Result<String, LlmError> {
                Err(LlmError::NotConfigured("openai"))
            }
        }

        let service = GenerationService::new(
            Arc::new(Unconfigured),
            Arc::new(PromptTable::default()),
            "gpt-4o".to_string(),
        );
        let result = service.qa_pairs("text".to_string(), None, None).await;
        assert!(matches!(result, Err(ApiError::ProviderNotConfigured(name)) if name == "openai"));
    }

    #[tokio::test]
    async fn test_bad_template_is_rejected() {
        let canned = Canned::new(Ok(""));
        let result = service(canned)
            .qa_pairs("text".to_string(), None, Some("no placeholder".to_string()))
            .await;
        assert!(result.is_err());
    }
}
