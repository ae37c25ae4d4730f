//! Page-range text extraction from paged documents.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::PageRangeError;

const FORM_FEED: char = '\u{000C}';

/// 1-based page selection. Open ends default to the first and last page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl PageRange {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Every page.
    pub fn all() -> Self {
        Self::default()
    }

    /// Resolve to 0-based page indices for a document of `total` pages.
    ///
    /// The end page is inclusive and clamped to `total`.
    pub fn resolve(&self, total: usize) -> Result<Range<usize>, PageRangeError> {
        if total == 0 {
            return Err(PageRangeError::NoPages);
        }

        let start = self.start.unwrap_or(1);
        if start == 0 || start > total {
            return Err(PageRangeError::StartOutOfRange { start, total });
        }
        let start_idx = start - 1;
        let end_idx = self.end.unwrap_or(total).min(total);
        if end_idx <= start_idx {
            return Err(PageRangeError::EndBeforeStart);
        }

        Ok(start_idx..end_idx)
    }
}

/// A document whose pages can be read as plain text.
pub trait TextSource {
    fn page_count(&self) -> usize;

    fn page_text(&self, index: usize) -> Option<&str>;

    /// Text of the pages in `range`, joined with newlines.
    ///
    /// Any failure yields an empty string; callers treat that as
    /// content-free input.
    fn extract_text(&self, range: PageRange) -> String {
        match range.resolve(self.page_count()) {
            Ok(indices) => indices
                .filter_map(|index| self.page_text(index))
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => {
                tracing::error!("Error extracting text: {}", e);
                String::new()
            }
        }
    }
}

/// In-memory pages of already extracted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagedText {
    pages: Vec<String>,
}

impl PagedText {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Split text on form feeds, the page break used by text exporters.
    pub fn from_form_feeds(text: &str) -> Self {
        Self {
            pages: text.split(FORM_FEED).map(str::to_string).collect(),
        }
    }
}

impl TextSource for PagedText {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(n: usize) -> PagedText {
        PagedText::new((1..=n).map(|i| format!("page {}", i)).collect())
    }

    #[test]
    fn resolve_defaults_to_all_pages() {
        assert_eq!(PageRange::all().resolve(5), Ok(0..5));
    }

    #[test]
    fn resolve_clamps_end() {
        assert_eq!(PageRange::new(Some(2), Some(99)).resolve(5), Ok(1..5));
    }

    #[test]
    fn resolve_rejects_bad_start() {
        assert_eq!(
            PageRange::new(Some(6), None).resolve(5),
            Err(PageRangeError::StartOutOfRange { start: 6, total: 5 })
        );
        assert_eq!(
            PageRange::new(Some(0), None).resolve(5),
            Err(PageRangeError::StartOutOfRange { start: 0, total: 5 })
        );
    }

    #[test]
    fn resolve_rejects_end_before_start() {
        assert_eq!(
            PageRange::new(Some(3), Some(2)).resolve(5),
            Err(PageRangeError::EndBeforeStart)
        );
    }

    #[test]
    fn single_page_range() {
        assert_eq!(pages(5).extract_text(PageRange::new(Some(3), Some(3))), "page 3");
    }

    #[test]
    fn extract_joins_pages() {
        let text = pages(4).extract_text(PageRange::new(Some(2), Some(3)));
        assert_eq!(text, "page 2\npage 3");
    }

    #[test]
    fn extract_failure_is_empty() {
        assert_eq!(pages(2).extract_text(PageRange::new(Some(9), None)), "");
        assert_eq!(PagedText::default().extract_text(PageRange::all()), "");
    }

    #[test]
    fn form_feed_pages() {
        let doc = PagedText::from_form_feeds("one\u{000C}two\u{000C}three");
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.extract_text(PageRange::new(Some(2), None)), "two\nthree");
    }
}
