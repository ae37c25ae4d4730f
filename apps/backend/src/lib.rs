pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use cardgen_core::{DeckSink, PromptTable, ProviderKind};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::deck_writer::FileDeckSink;
use crate::services::generation::GenerationService;
use crate::services::llm::LlmRouter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generation: GenerationService,
    pub sink: Arc<dyn DeckSink>,
    /// Providers with an API key, for the model catalogue.
    pub providers: Arc<Vec<ProviderKind>>,
}

/// All API routes, without middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/models", get(routes::catalog::models))
        .route("/api/extract", post(routes::extract::extract))
        .route("/api/generate/qa", post(routes::generate::qa))
        .route("/api/generate/cloze", post(routes::generate::cloze))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Configuring completion providers...");
    let llm = LlmRouter::from_config(&config)?;
    let providers = llm.configured();

    let sink = FileDeckSink::new(&config.deck_output_dir);
    tracing::info!("Writing decks to {}", sink.dir().display());

    let state = AppState {
        generation: GenerationService::new(
            Arc::new(llm),
            Arc::new(PromptTable::default()),
            config.default_model.clone(),
        ),
        sink: Arc::new(sink),
        providers: Arc::new(providers),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
