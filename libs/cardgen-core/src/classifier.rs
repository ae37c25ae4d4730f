//! Heuristic question detection for single sentences.

const QUESTION_WORDS: &[&str] = &[
    "what", "why", "how", "when", "where", "which", "who", "whose", "whom",
];

const AUXILIARY_VERBS: &[&str] = &[
    "is", "are", "was", "were", "do", "does", "did", "have", "has", "had", "can", "could",
    "should", "would", "will",
];

/// Whether `sentence` reads as a question.
///
/// Checked in order: a literal `?`, a leading interrogative word, a leading
/// auxiliary or modal verb.
pub fn is_question(sentence: &str) -> bool {
    if sentence.contains('?') {
        return true;
    }

    let Some(first) = sentence.split_whitespace().next() else {
        return false;
    };
    let first = first.to_lowercase();

    QUESTION_WORDS.contains(&first.as_str()) || AUXILIARY_VERBS.contains(&first.as_str())
}
