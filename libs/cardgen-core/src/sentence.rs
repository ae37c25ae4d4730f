//! Punctuation-based sentence splitting.
//!
//! A boundary is `.`, `!` or `?` followed by whitespace and an uppercase
//! letter. The uppercase letter starts the next sentence.

use once_cell::sync::Lazy;
use regex::{Match, Matches, Regex};

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+\p{Lu}").expect("sentence boundary pattern"));

/// Iterate over the trimmed, non-empty sentences of `text`.
///
/// The iterator borrows from `text`; call again to restart.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences {
        text,
        boundaries: BOUNDARY.find_iter(text),
        start: 0,
        done: false,
    }
}

/// Collect [`sentences`] into owned strings.
pub fn split_sentences(text: &str) -> Vec<String> {
    sentences(text).map(str::to_string).collect()
}

/// Lazy sentence iterator returned by [`sentences`].
#[derive(Debug)]
pub struct Sentences<'a> {
    text: &'a str,
    boundaries: Matches<'static, 'a>,
    start: usize,
    done: bool,
}

impl<'a> Sentences<'a> {
    fn cut(&mut self, boundary: Match<'a>) -> &'a str {
        // punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        let upper_len = boundary
            .as_str()
            .chars()
            .next_back()
            .map_or(0, char::len_utf8);
        let piece = &self.text[self.start..end];
        self.start = boundary.end() - upper_len;
        piece
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.done {
            let piece = match self.boundaries.next() {
                Some(boundary) => self.cut(boundary),
                None => {
                    self.done = true;
                    &self.text[self.start..]
                }
            };

            let piece = piece.trim();
            if !piece.is_empty() {
                return Some(piece);
            }
        }
        None
    }
}
