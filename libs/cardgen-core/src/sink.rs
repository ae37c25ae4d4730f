//! Destination for finished decks.
//!
//! The packaging format belongs to the implementor; records handed over are
//! already validated.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::types::{CardKind, ClozeItem, QaPair};

/// Validated cards of a single kind, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "notes", rename_all = "snake_case")]
pub enum DeckRecords {
    Basic(Vec<QaPair>),
    Cloze(Vec<ClozeItem>),
}

impl DeckRecords {
    pub fn kind(&self) -> CardKind {
        match self {
            Self::Basic(_) => CardKind::Basic,
            Self::Cloze(_) => CardKind::Cloze,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Basic(pairs) => pairs.len(),
            Self::Cloze(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A deck as handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub source: String,
    pub records: DeckRecords,
}

/// Packages validated records into a deck.
pub trait DeckSink: Send + Sync {
    /// Write a deck and return where it went, or `None` when nothing was
    /// written.
    fn emit_deck(&self, records: &DeckRecords, deck_name: &str, source_label: &str)
        -> Option<PathBuf>;
}

/// Sink that keeps decks in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    decks: Mutex<Vec<Deck>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decks emitted so far, oldest first.
    pub fn decks(&self) -> Vec<Deck> {
        self.decks.lock().expect("memory sink lock").clone()
    }
}

impl DeckSink for MemorySink {
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

        self.decks.lock().expect("memory sink lock").push(Deck {
            name: deck_name.to_string(),
            source: source_label.to_string(),
            records: records.clone(),
        });
        Some(PathBuf::from(deck_name))
    }
}
