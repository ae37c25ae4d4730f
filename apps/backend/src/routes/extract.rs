//! Extraction endpoint

use axum::{extract::State, Json};
use cardgen_core::{parse_content_detailed, DeckRecords};

use crate::error::{ApiError, Result};
use crate::models::{ExtractRequest, ExtractResponse};
use crate::AppState;

/// POST /api/extract
///
/// Pull Q/A pairs out of document text without calling a model.
pub async fn extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>> {
    let text = request.source.into_text();
    let parsed = tokio::task::spawn_blocking(move || parse_content_detailed(&text)).await?;
    if parsed.pairs.is_empty() {
        return Err(ApiError::no_records(&[]));
    }

    tracing::info!(
        strategy = ?parsed.strategy,
        pairs = parsed.pairs.len(),
        "Extracted pairs"
    );

    let deck_path = super::emit_deck(
        state.sink.clone(),
        DeckRecords::Basic(parsed.pairs.clone()),
        request.deck,
    )
    .await?;

    Ok(Json(ExtractResponse {
        strategy: parsed.strategy,
        pairs: parsed.pairs,
        deck_path,
    }))
}
