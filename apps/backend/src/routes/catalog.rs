//! Model catalogue endpoint

use axum::{extract::State, Json};
use cardgen_core::provider::catalog;

use crate::models::{ModelEntry, ModelsResponse};
use crate::AppState;

/// GET /api/models
pub async fn models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = catalog()
        .into_iter()
        .map(|info| ModelEntry {
            id: info.id.to_string(),
            provider: info.provider,
            available: state.providers.contains(&info.provider),
        })
        .collect();

    Json(ModelsResponse {
        default_model: state.generation.default_model().to_string(),
        models,
    })
}
