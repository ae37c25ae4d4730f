//! Extraction of explicitly marked question/answer regions.
//!
//! # Formats
//! ```text
//! ### Question: What is Rust?
//! ### Answer: A systems programming language.
//!
//! Q: What is borrowing?
//! A: Taking a reference without taking ownership.
//! ```
//!
//! The question runs from a question marker to the next answer marker; the
//! answer runs from there to the next question marker or end of input.
//!
//! Markers are matched case-insensitively anywhere after a word boundary, so
//! a bare `a:` inside a question (`Q: Is plan a: good?`) is taken as the
//! answer marker. Sources that use letters as option labels need the
//! delimited `###` form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::QaPair;

/// A question marker and the answer marker that closes it.
#[derive(Debug)]
pub struct MarkerPattern {
    pub name: &'static str,
    question: Regex,
    answer: Regex,
}

impl MarkerPattern {
    fn new(name: &'static str, question: &str, answer: &str) -> Self {
        Self {
            name,
            question: Regex::new(question).expect("question marker pattern"),
            answer: Regex::new(answer).expect("answer marker pattern"),
        }
    }

    /// All pairs this pattern finds in `text`, in order of appearance.
    pub fn extract(&self, text: &str) -> Vec<QaPair> {
        let mut pairs = Vec::new();
        let mut next_question = self.question.find(text);

        while let Some(question) = next_question {
            let Some(answer) = self.answer.find_at(text, question.end()) else {
                break;
            };

            next_question = self.question.find_at(text, answer.end());
            let answer_end = next_question.map_or(text.len(), |m| m.start());

            let question_text = &text[question.end()..answer.start()];
            let answer_text = &text[answer.end()..answer_end];
            if let Some(pair) = QaPair::new(question_text, answer_text) {
                pairs.push(pair);
            }
        }

        pairs
    }
}

/// Marker patterns in priority order.
pub static PATTERNS: Lazy<Vec<MarkerPattern>> = Lazy::new(|| {
    vec![
        MarkerPattern::new(
            "delimited",
            r"(?i)###\s*Q(?:uestion)?\b[\s:]*",
            r"(?i)###\s*A(?:nswer)?\b[\s:]*",
        ),
        MarkerPattern::new(
            "labelled",
            r"(?i)\bQ(?:uestion)?\s*:",
            r"(?i)\bA(?:nswer)?\s*:",
        ),
    ]
});

/// Extract marked Q/A pairs from `text`.
///
/// Patterns are tried in priority order; the first one that yields a pair
/// wins and later patterns are not consulted.
pub fn extract_structured(text: &str) -> Vec<QaPair> {
    for pattern in PATTERNS.iter() {
        let pairs = pattern.extract(text);
        if !pairs.is_empty() {
            tracing::debug!(pattern = pattern.name, count = pairs.len(), "structured pairs found");
            return pairs;
        }
    }
    Vec::new()
}
