//! Question/answer inference for text without explicit markers.

use crate::classifier::is_question;
use crate::types::{QaPair, TextUnit};

/// Pair every question sentence with the sentence that follows it.
///
/// A trailing question has no answer and is skipped. A sentence used as an
/// answer can also open the next pair.
pub fn infer_pairs(text: &str) -> Vec<QaPair> {
    infer_from_unit(&TextUnit::from_text(text))
}

/// [`infer_pairs`] over an already split [`TextUnit`].
pub fn infer_from_unit(unit: &TextUnit) -> Vec<QaPair> {
    unit.sentences()
        .windows(2)
        .filter(|window| is_question(&window[0]))
        .filter_map(|window| QaPair::new(&window[0], &window[1]))
        .collect()
}
