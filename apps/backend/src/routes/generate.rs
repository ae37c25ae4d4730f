//! Model-backed generation endpoints

use axum::{extract::State, Json};
use cardgen_core::{ClozeItem, DeckRecords, QaPair};

use crate::error::{ApiError, Result};
use crate::models::{GenerateRequest, GenerateResponse};
use crate::AppState;

/// POST /api/generate/qa
pub async fn qa(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse<QaPair>>> {
    let generation = state
        .generation
        .qa_pairs(request.source.into_text(), request.model, request.prompt)
        .await?;
    let generated = generation.generated;
    if generated.is_empty() {
        return Err(ApiError::no_records(&generated.diagnostics));
    }

    let deck_path = super::emit_deck(
        state.sink.clone(),
        DeckRecords::Basic(generated.records.clone()),
        request.deck,
    )
    .await?;

    Ok(Json(GenerateResponse {
        model: generation.model,
        provider: generation.provider,
        records: generated.records,
        diagnostics: generated.diagnostics,
        deck_path,
    }))
}

/// POST /api/generate/cloze
///
/// Items that fail cloze validation are reported in `diagnostics`; the
/// request only fails when nothing survives.
pub async fn cloze(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse<ClozeItem>>> {
    let generation = state
        .generation
        .cloze_items(request.source.into_text(), request.model, request.prompt)
        .await?;
    let generated = generation.generated;
    if generated.is_empty() {
        return Err(ApiError::no_records(&generated.diagnostics));
    }

    let deck_path = super::emit_deck(
        state.sink.clone(),
        DeckRecords::Cloze(generated.records.clone()),
        request.deck,
    )
    .await?;

    Ok(Json(GenerateResponse {
        model: generation.model,
        provider: generation.provider,
        records: generated.records,
        diagnostics: generated.diagnostics,
        deck_path,
    }))
}
