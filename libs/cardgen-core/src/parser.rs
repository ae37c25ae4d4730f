//! Line parser for language-model completions.
//!
//! # Format
//! ```text
//! Q: What is Rust?
//! A: A systems programming language.
//!
//! Text: {{c1::Rust}} is a systems programming language.
//! Extra: Started at Mozilla.
//! Continuation lines are appended to Extra.
//! ```
//!
//! The first field is always a single line. The second field collects its
//! marker line and every following non-blank line until the next record.

use crate::types::Record;

/// Line prefixes for the two fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub key1: &'static str,
    pub key2: &'static str,
}

impl Markers {
    /// `Q:` / `A:` records.
    pub const QA: Self = Self {
        key1: "Q:",
        key2: "A:",
    };

    /// `Text:` / `Extra:` records.
    pub const CLOZE: Self = Self {
        key1: "Text:",
        key2: "Extra:",
    };
}

/// Parse `content` into records delimited by `markers`.
///
/// Records missing either field are dropped.
pub fn parse_records(content: &str, markers: Markers) -> Vec<Record> {
    if content.trim().is_empty() {
        return vec![];
    }

    let mut parser = Parser::new(markers);
    for line in content.lines() {
        parser.process_line(line);
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NoRecord,
    AccumulatingKey1,
    AccumulatingKey2,
}

enum LineType<'a> {
    Key1(&'a str),
    Key2(&'a str),
    Text(&'a str),
    Empty,
}

struct Parser {
    markers: Markers,
    state: State,
    key1: Option<String>,
    buffer: Vec<String>,
    records: Vec<Record>,
}

impl Parser {
    fn new(markers: Markers) -> Self {
        Self {
            markers,
            state: State::NoRecord,
            key1: None,
            buffer: Vec::new(),
            records: Vec::new(),
        }
    }

    fn parse_line<'a>(&self, line: &'a str) -> LineType<'a> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(self.markers.key1) {
            LineType::Key1(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix(self.markers.key2) {
            LineType::Key2(rest.trim())
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(trimmed)
        }
    }

    fn process_line(&mut self, line: &str) {
        self.state = match (self.state, self.parse_line(line)) {
            (state, LineType::Empty) => state,
            (_, LineType::Key1(text)) => {
                self.flush();
                self.key1 = Some(text.to_string());
                State::AccumulatingKey1
            }
            (State::NoRecord, LineType::Key2(_)) => State::NoRecord,
            (_, LineType::Key2(text)) => {
                self.buffer.clear();
                self.buffer.push(text.to_string());
                State::AccumulatingKey2
            }
            (State::AccumulatingKey2, LineType::Text(text)) => {
                self.buffer.push(text.to_string());
                State::AccumulatingKey2
            }
            (state, LineType::Text(_)) => state,
        };
    }

    /// Emit the pending record if both fields have content, then reset.
    fn flush(&mut self) {
        let key1 = self.key1.take();
        let key2 = self.buffer.join("\n");
        self.buffer.clear();
        self.state = State::NoRecord;

        let Some(key1) = key1 else {
            return;
        };
        let key1 = key1.trim();
        let key2 = key2.trim();
        if key1.is_empty() || key2.is_empty() {
            return;
        }

        self.records.push(Record {
            key1: key1.to_string(),
            key2: key2.to_string(),
        });
    }

    fn finish(mut self) -> Vec<Record> {
        self.flush();
        self.records
    }
}
