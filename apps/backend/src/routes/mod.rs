pub mod catalog;
pub mod extract;
pub mod generate;

use std::path::Path;
use std::sync::Arc;

use cardgen_core::{DeckRecords, DeckSink};

use crate::error::{ApiError, Result};
use crate::models::DeckTarget;

/// Deck name to write under; a blank name falls back to `<source stem>_deck`.
fn deck_name(target: &DeckTarget) -> String {
    let name = target.name.trim();
    if !name.is_empty() {
        return name.to_string();
    }

    let stem = Path::new(target.source_label.trim())
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("manual_input");
    format!("{}_deck", stem)
}

/// Hand records to the sink on a blocking worker. Returns the written path
/// when a deck was requested.
///
/// Records are non-empty here, so a sink that writes nothing has failed.
async fn emit_deck(
    sink: Arc<dyn DeckSink>,
    records: DeckRecords,
    deck: Option<DeckTarget>,
) -> Result<Option<String>> {
    let Some(target) = deck else {
        return Ok(None);
    };
    let name = deck_name(&target);

    let path = tokio::task::spawn_blocking(move || {
        sink.emit_deck(&records, &name, &target.source_label)
    })
    .await?
    .ok_or_else(|| ApiError::Internal("deck could not be written".to_string()))?;

    Ok(Some(path.display().to_string()))
}
