//! Repair and validation of cloze deletion syntax.
//!
//! Models sometimes answer with `{c1::term}` instead of `{{c1::term}}`. Such
//! text is repaired by doubling every `{c` and every `}` in the field. Stray
//! single braces elsewhere in the same field are doubled too.

use crate::error::Diagnostic;
use crate::types::{ClozeItem, Record};

const PREVIEW_CHARS: usize = 50;

/// Validated cloze items plus a diagnostic for every dropped candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClozeValidation {
    pub items: Vec<ClozeItem>,
    pub rejected: Vec<Diagnostic>,
}

/// Rewrite single-brace cloze markers to the double-brace form.
///
/// Text that already contains `{{` is returned unchanged.
pub fn repair_cloze(text: &str) -> String {
    let single_brace = text.contains("{c") && text.contains("::") && text.contains('}');
    if single_brace && !text.contains("{{") {
        text.replace("{c", "{{c").replace('}', "}}")
    } else {
        text.to_string()
    }
}

/// Whether `text` carries the pieces of a `{{cN::...}}` marker.
pub fn has_cloze_markers(text: &str) -> bool {
    text.contains("{{c") && text.contains("::") && text.contains("}}")
}

/// Repair then validate one candidate.
pub fn validate_item(item: ClozeItem) -> Result<ClozeItem, Diagnostic> {
    let text = repair_cloze(&item.text);
    if !has_cloze_markers(&text) {
        return Err(Diagnostic::InvalidClozeSyntax {
            preview: preview(&item.text),
        });
    }
    Ok(ClozeItem {
        text,
        extra: item.extra,
    })
}

/// Validate every candidate in order, dropping the ones that cannot be
/// repaired.
pub fn validate_cloze<I>(candidates: I) -> ClozeValidation
where
    I: IntoIterator<Item = ClozeItem>,
{
    let mut validation = ClozeValidation::default();

    for candidate in candidates {
        match validate_item(candidate) {
            Ok(item) => validation.items.push(item),
            Err(diagnostic) => {
                tracing::warn!("Skipping cloze item: {}", diagnostic);
                validation.rejected.push(diagnostic);
            }
        }
    }

    validation
}

/// Validate cloze records produced by [`crate::parser::parse_records`].
pub fn validate_records(records: Vec<Record>) -> ClozeValidation {
    validate_cloze(records.into_iter().map(ClozeItem::from))
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
