//! Turning completion outcomes into validated cards.

use serde::Serialize;

use crate::cloze::validate_records;
use crate::error::Diagnostic;
use crate::parser::{parse_records, Markers};
use crate::types::{ClozeItem, QaPair};

/// Outcome of a completion request: the completion text, or the reason the
/// request failed.
pub type Completion = std::result::Result<String, String>;

/// Cards produced by one generation run and what went wrong along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Generated<T> {
    /// No cards, with the reason why.
    pub fn failed(diagnostic: Diagnostic) -> Self {
        Self {
            records: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Check a completion before parsing it.
pub fn completion_text(completion: Completion) -> Result<String, Diagnostic> {
    match completion {
        Err(reason) => {
            tracing::error!("Error getting LLM completion: {}", reason);
            Err(Diagnostic::UpstreamFailure { reason })
        }
        Ok(text) if text.trim().is_empty() => Err(Diagnostic::EmptyInput),
        Ok(text) => Ok(text),
    }
}

/// Parse `Q:`/`A:` records out of a completion.
pub fn generate_qa_pairs(completion: Completion) -> Generated<QaPair> {
    let text = match completion_text(completion) {
        Ok(text) => text,
        Err(diagnostic) => return Generated::failed(diagnostic),
    };

    Generated {
        records: parse_records(&text, Markers::QA)
            .into_iter()
            .map(QaPair::from)
            .collect(),
        diagnostics: Vec::new(),
    }
}

/// Parse `Text:`/`Extra:` records out of a completion and keep the ones
/// with usable cloze markers.
pub fn generate_cloze_items(completion: Completion) -> Generated<ClozeItem> {
    let text = match completion_text(completion) {
        Ok(text) => text,
        Err(diagnostic) => return Generated::failed(diagnostic),
    };

    let validation = validate_records(parse_records(&text, Markers::CLOZE));
    Generated {
        records: validation.items,
        diagnostics: validation.rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn qa_pairs_from_completion() {
        let generated = generate_qa_pairs(Ok("Q: What is Rust?\nA: A language.".to_string()));
        assert_eq!(
            generated.records,
            vec![QaPair::new("What is Rust?", "A language.").unwrap()]
        );
        assert!(generated.diagnostics.is_empty());
    }

    #[test]
    fn upstream_failure_is_reported() {
        let generated = generate_qa_pairs(Err("401 Unauthorized".to_string()));
        assert!(generated.is_empty());
        assert_eq!(
            generated.diagnostics,
            vec![Diagnostic::UpstreamFailure {
                reason: "401 Unauthorized".to_string()
            }]
        );
    }

    #[test]
    fn blank_completion_is_empty_input() {
        let generated = generate_cloze_items(Ok("  \n ".to_string()));
        assert!(generated.is_empty());
        assert_eq!(generated.diagnostics, vec![Diagnostic::EmptyInput]);
    }

    #[test]
    fn cloze_items_are_repaired_and_filtered() {
        let completion = "Text: {c1::Python} was made.\nExtra: x\n\nText: no markers here\nExtra: y";
        let generated = generate_cloze_items(Ok(completion.to_string()));
        assert_eq!(
            generated.records,
            vec![ClozeItem {
                text: "{{c1::Python}} was made.".to_string(),
                extra: "x".to_string(),
            }]
        );
        assert_eq!(generated.diagnostics.len(), 1);
    }

    #[test]
    fn unparseable_completion_has_no_records() {
        let generated = generate_qa_pairs(Ok("I cannot help with that.".to_string()));
        assert!(generated.is_empty());
        assert!(generated.diagnostics.is_empty());
    }
}
