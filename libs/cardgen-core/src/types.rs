//! Core types for card generation.

use serde::{Deserialize, Serialize};

/// Kind of card a generation run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Basic,
    Cloze,
}

impl CardKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Cloze => "cloze",
        }
    }
}

/// Question/answer pair. Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    /// Build a pair from raw fields, trimming both.
    ///
    /// Returns `None` when either field is blank.
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }
}

/// Cloze deletion card: `text` carries `{{cN::...}}` markers, `extra` is
/// shown on the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClozeItem {
    pub text: String,
    pub extra: String,
}

/// Two-field record pulled out of a completion before it is typed as a
/// [`QaPair`] or [`ClozeItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key1: String,
    pub key2: String,
}

impl From<Record> for QaPair {
    fn from(record: Record) -> Self {
        Self {
            question: record.key1,
            answer: record.key2,
        }
    }
}

impl From<Record> for ClozeItem {
    fn from(record: Record) -> Self {
        Self {
            text: record.key1,
            extra: record.key2,
        }
    }
}

/// Ordered sentences of one source region. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextUnit {
    sentences: Vec<String>,
}

impl TextUnit {
    /// Split `text` into sentences.
    pub fn from_text(text: &str) -> Self {
        Self {
            sentences: crate::sentence::sentences(text).map(str::to_string).collect(),
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
