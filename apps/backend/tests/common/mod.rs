//! Shared test context for the API integration tests.
//!
//! Completions come from a scripted fake and decks are written to a
//! per-test temporary directory, so no network or API keys are needed.

pub mod fixtures;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use cardgen_backend::services::deck_writer::FileDeckSink;
use cardgen_backend::services::generation::GenerationService;
use cardgen_backend::services::llm::{CompletionService, LlmError};
use cardgen_backend::{build_router, AppState};
use cardgen_core::{PromptTable, ProviderKind};

/// Fake completion backend returning a fixed reply.
pub struct ScriptedCompletions {
    reply: Result<String, String>,
    configured: Vec<ProviderKind>,
    requests: Mutex<Vec<CompletionRequest>>,
}

/// A prompt/model pair seen by [`ScriptedCompletions`].
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
}

#[async_trait]
impl CompletionService for ScriptedCompletions {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(CompletionRequest {
            prompt: prompt.to_string(),
            model: model.to_string(),
        });

        let kind = ProviderKind::for_model(model);
        if !self.configured.contains(&kind) {
            return Err(LlmError::NotConfigured(kind.as_str()));
        }

        self.reply.clone().map_err(|message| LlmError::Api {
            status: 500,
            message,
        })
    }
}

/// Test context holding the router, the fake backend and the deck directory.
pub struct TestContext {
    pub deck_dir: PathBuf,
    /// Top-level temp path removed on drop.
    scratch: PathBuf,
    completions: Arc<ScriptedCompletions>,
    app: Router,
}

impl TestContext {
    /// Context whose completions always return `reply`, with the OpenAI
    /// provider configured.
    pub fn new(reply: &str) -> Self {
        Self::build(Ok(reply.to_string()), vec![ProviderKind::OpenAi])
    }

    /// Context whose completions always fail with `message`.
    pub fn failing(message: &str) -> Self {
        Self::build(Err(message.to_string()), vec![ProviderKind::OpenAi])
    }

    /// Context with an explicit set of configured providers.
    pub fn with_providers(reply: &str, providers: Vec<ProviderKind>) -> Self {
        Self::build(Ok(reply.to_string()), providers)
    }

    /// Context whose deck directory sits under a regular file, so every
    /// deck write fails.
    pub fn with_unwritable_decks(reply: &str) -> Self {
        let scratch = scratch_path();
        std::fs::write(&scratch, b"not a directory").unwrap();
        Self::build_in(
            Ok(reply.to_string()),
            vec![ProviderKind::OpenAi],
            scratch.join("decks"),
            scratch,
        )
    }

    fn build(reply: Result<String, String>, configured: Vec<ProviderKind>) -> Self {
        let deck_dir = scratch_path();
        Self::build_in(reply, configured, deck_dir.clone(), deck_dir)
    }

    fn build_in(
        reply: Result<String, String>,
        configured: Vec<ProviderKind>,
        deck_dir: PathBuf,
        scratch: PathBuf,
    ) -> Self {
        let completions = Arc::new(ScriptedCompletions {
            reply,
            configured: configured.clone(),
            requests: Mutex::new(Vec::new()),
        });

        let state = AppState {
            generation: GenerationService::new(
                completions.clone(),
                Arc::new(PromptTable::default()),
                "gpt-4o".to_string(),
            ),
            sink: Arc::new(FileDeckSink::new(&deck_dir)),
            providers: Arc::new(configured),
        };

        Self {
            deck_dir,
            scratch,
            completions,
            app: build_router(state),
        }
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).unwrap()
    }

    /// Completion requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.completions.requests.lock().unwrap().clone()
    }

    pub fn deck_path(&self, file_name: &str) -> PathBuf {
        self.deck_dir.join(file_name)
    }

    pub fn deck_exists(&self, file_name: &str) -> bool {
        self.deck_path(file_name).exists()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if self.scratch.is_dir() {
            let _ = std::fs::remove_dir_all(&self.scratch);
        } else {
            let _ = std::fs::remove_file(&self.scratch);
        }
    }
}

fn scratch_path() -> PathBuf {
    std::env::temp_dir().join(format!("cardgen-test-{}", Uuid::new_v4()))
}
