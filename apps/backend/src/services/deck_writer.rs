//! File-system deck sink.
//!
//! Each deck becomes one JSON document in the output directory:
//! `<name>.json` for basic decks and `<name>_cloze.json` for cloze decks.

use std::fs;
use std::path::{Path, PathBuf};

use cardgen_core::{CardKind, DeckRecords, DeckSink};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Deck file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckDocument {
    pub deck_id: u64,
    pub name: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub records: DeckRecords,
}

/// Writes decks as JSON files under a directory.
#[derive(Debug, Clone)]
pub struct FileDeckSink {
    dir: PathBuf,
}

impl FileDeckSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a deck, returning the file path.
    pub fn write_deck(
        &self,
        records: &DeckRecords,
        deck_name: &str,
        source_label: &str,
    ) -> Result<PathBuf, DeckWriteError> {
        let name = match records.kind() {
            CardKind::Basic => deck_name.to_string(),
            CardKind::Cloze => format!("{} (Cloze)", deck_name),
        };
        let document = DeckDocument {
            deck_id: deck_id(&name),
            name,
            source: source_label.to_string(),
            created_at: Utc::now(),
            records: records.clone(),
        };

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name(deck_name, records.kind()));
        fs::write(&path, serde_json::to_vec_pretty(&document)?)?;
        Ok(path)
    }
}

impl DeckSink for FileDeckSink {
    fn emit_deck(
        &self,
        records: &DeckRecords,
        deck_name: &str,
        source_label: &str,
    ) -> Option<PathBuf> {
        if records.is_empty() {
            tracing::warn!("No records provided for deck {}", deck_name);
            return None;
        }

        match self.write_deck(records, deck_name, source_label) {
            Ok(path) => {
                tracing::info!("Created deck: {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::error!("Error creating deck {}: {}", deck_name, e);
                None
            }
        }
    }
}

/// Read back a deck file written by [`FileDeckSink`].
pub fn read_deck(path: &Path) -> Result<DeckDocument, DeckWriteError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Stable deck id in `[2^30, 2^31)` derived from the deck name.
pub fn deck_id(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    (1 << 30) + u64::from_be_bytes(bytes) % (1 << 30)
}

/// File name for a deck; anything outside `[A-Za-z0-9 ._-]` becomes `_`.
pub fn file_name(deck_name: &str, kind: CardKind) -> String {
    let mut stem: String = deck_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    stem = stem.trim_matches('.').to_string();
    if stem.is_empty() {
        stem = "deck".to_string();
    }

    match kind {
        CardKind::Basic => format!("{}.json", stem),
        CardKind::Cloze => format!("{}_cloze.json", stem),
    }
}
