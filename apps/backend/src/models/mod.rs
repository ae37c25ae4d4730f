//! API request and response types

use cardgen_core::{
    Diagnostic, PageRange, PagedText, ProviderKind, QaPair, Strategy, TextSource,
};
use serde::{Deserialize, Serialize};

/// Document text supplied with a request: either raw text or extracted
/// pages with an optional 1-based page range.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SourceInput {
    Text {
        text: String,
    },
    Pages {
        pages: Vec<String>,
        #[serde(default)]
        start_page: Option<usize>,
        #[serde(default)]
        end_page: Option<usize>,
    },
}

impl SourceInput {
    /// Plain text for the selected region. Invalid page ranges give an
    /// empty string.
    pub fn into_text(self) -> String {
        match self {
            Self::Text { text } => text,
            Self::Pages {
                pages,
                start_page,
                end_page,
            } => PagedText::new(pages).extract_text(PageRange::new(start_page, end_page)),
        }
    }
}

fn default_source_label() -> String {
    "Unknown".to_string()
}

/// Where to package the generated cards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeckTarget {
    pub name: String,
    #[serde(default = "default_source_label")]
    pub source_label: String,
}

/// POST /api/extract body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractRequest {
    #[serde(flatten)]
    pub source: SourceInput,
    #[serde(default)]
    pub deck: Option<DeckTarget>,
}

/// POST /api/extract response
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponse {
    pub strategy: Strategy,
    pub pairs: Vec<QaPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_path: Option<String>,
}

/// POST /api/generate/{qa,cloze} body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub source: SourceInput,
    #[serde(default)]
    pub model: Option<String>,
    /// Custom template containing `{text}`.
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub deck: Option<DeckTarget>,
}

/// POST /api/generate/{qa,cloze} response
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse<T> {
    pub model: String,
    pub provider: ProviderKind,
    pub records: Vec<T>,
    /// Candidates that were dropped, and why.
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_path: Option<String>,
}

/// Entry of GET /api/models
#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    pub id: String,
    pub provider: ProviderKind,
    pub available: bool,
}

/// GET /api/models response
#[derive(Debug, Clone, Serialize)]
pub struct ModelsResponse {
    pub default_model: String,
    pub models: Vec<ModelEntry>,
}
