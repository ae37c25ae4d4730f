//! Error and diagnostic types for cardgen-core.

use serde::Serialize;
use thiserror::Error;

/// Non-fatal conditions reported next to a (possibly empty) result.
///
/// Parsing never fails on bad content; these explain why output is short.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("input text is empty")]
    EmptyInput,

    #[error("completion request failed: {reason}")]
    UpstreamFailure { reason: String },

    #[error("invalid cloze syntax: {preview}")]
    InvalidClozeSyntax { preview: String },
}

/// Errors raised when building a prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("prompt template must contain the {{text}} placeholder")]
    MissingPlaceholder,

    #[error("prompt template is empty")]
    Empty,
}

/// Errors raised when resolving a page range against a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("document has no pages")]
    NoPages,

    #[error("start page {start} is out of range (1-{total})")]
    StartOutOfRange { start: usize, total: usize },

    #[error("end page must not come before start page")]
    EndBeforeStart,
}
