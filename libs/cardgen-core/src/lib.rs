//! Core card generation library used by the backend.
//!
//! Provides:
//! - Sentence splitting and question detection
//! - Marked and inferred Q/A extraction from document text
//! - Completion parsing into Q/A and cloze records, with cloze repair
//! - Prompt templates, provider selection and page-range text sources
//! - The deck sink interface

pub mod classifier;
pub mod cloze;
pub mod content;
pub mod error;
pub mod generate;
pub mod parser;
pub mod prompt;
pub mod provider;
pub mod sentence;
pub mod sink;
pub mod source;
pub mod structured;
pub mod types;
pub mod unstructured;

pub use classifier::is_question;
pub use cloze::{validate_cloze, ClozeValidation};
pub use content::{parse_content, parse_content_detailed, ParsedContent, Strategy};
pub use error::{Diagnostic, PageRangeError, TemplateError};
pub use generate::{generate_cloze_items, generate_qa_pairs, Completion, Generated};
pub use parser::{parse_records, Markers};
pub use prompt::{PromptTable, PromptTemplate};
pub use provider::{ModelInfo, ProviderKind, DEFAULT_MODEL};
pub use sentence::{sentences, split_sentences};
pub use sink::{Deck, DeckRecords, DeckSink, MemorySink};
pub use source::{PageRange, PagedText, TextSource};
pub use structured::extract_structured;
pub use types::{CardKind, ClozeItem, QaPair, Record, TextUnit};
pub use unstructured::infer_pairs;
