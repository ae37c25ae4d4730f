//! Request bodies and canned completions.

use serde_json::{json, Value};

/// Document text with explicit `Q:`/`A:` markers.
pub const MARKED_TEXT: &str =
    "Q: What is Rust? A: A systems language. Q: Who started it? A: Graydon Hoare.";

/// Prose without markers; pairs are inferred from question sentences.
pub const PROSE_TEXT: &str =
    "What is Rust? It is a systems language. Who created Rust? Graydon Hoare did.";

/// A model reply in the Q/A response format.
pub fn qa_completion(count: usize) -> String {
    (0..count)
        .map(|i| format!("Q: Question {}?\nA: Answer {}.\n", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A model reply in the cloze response format, one item per entry.
pub fn cloze_completion(items: &[(&str, &str)]) -> String {
    items
        .iter()
        .map(|(text, extra)| format!("Text: {}\nExtra: {}\n", text, extra))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn text_request(text: &str) -> Value {
    json!({ "text": text })
}

pub fn pages_request(pages: &[&str], start_page: Option<usize>, end_page: Option<usize>) -> Value {
    json!({
        "pages": pages,
        "start_page": start_page,
        "end_page": end_page,
    })
}

/// Add a deck target to a request body.
pub fn with_deck(mut body: Value, name: &str, source_label: &str) -> Value {
    body["deck"] = json!({ "name": name, "source_label": source_label });
    body
}
