//! Structured-then-unstructured Q/A extraction.

use serde::Serialize;

use crate::structured::extract_structured;
use crate::types::QaPair;
use crate::unstructured::infer_pairs;

/// Which extractor produced a [`ParsedContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Structured,
    Unstructured,
}

/// Extracted pairs and the strategy that found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedContent {
    pub strategy: Strategy,
    pub pairs: Vec<QaPair>,
}

/// Parse `text` into Q/A pairs.
pub fn parse_content(text: &str) -> Vec<QaPair> {
    parse_content_detailed(text).pairs
}

/// Parse `text` into Q/A pairs, reporting which extractor was used.
///
/// Marked pairs are returned as soon as any are found. Otherwise pairs are
/// inferred from question sentences (possibly none).
pub fn parse_content_detailed(text: &str) -> ParsedContent {
    let pairs = extract_structured(text);
    if !pairs.is_empty() {
        return ParsedContent {
            strategy: Strategy::Structured,
            pairs,
        };
    }

    tracing::debug!("no marked pairs, inferring from sentences");
    ParsedContent {
        strategy: Strategy::Unstructured,
        pairs: infer_pairs(text),
    }
}
