//! Prompt templates for card generation.

use crate::error::TemplateError;
use crate::types::CardKind;

/// Placeholder replaced by the source text.
pub const PLACEHOLDER: &str = "{text}";

const DEFAULT_QA_TEMPLATE: &str = "\
Given the following text from a document, create high-quality flashcards in a question and answer format.
Follow these guidelines:
1. Create clear, concise questions that test understanding
2. Ensure answers are comprehensive but focused
3. Break complex concepts into multiple cards
4. Use proper terminology
5. Format output as:
Q: [Question]
A: [Answer]

Text:
{text}
";

const DEFAULT_CLOZE_TEMPLATE: &str = "\
Create Anki cloze deletion cards from the following text.
Use {{c1::text}} format for cloze deletions.
Include relevant extra information after \"Extra:\" for each card.
Format each card as:

Text: [text with cloze deletions]
Extra: [additional information]

Text:
{text}
";

/// A prompt with exactly the text placeholder to fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    /// Validate a template. It must mention [`PLACEHOLDER`].
    pub fn new(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(TemplateError::Empty);
        }
        if !template.contains(PLACEHOLDER) {
            return Err(TemplateError::MissingPlaceholder);
        }
        Ok(Self(template))
    }

    /// Substitute `text` for the placeholder. Other braces are left alone.
    pub fn render(&self, text: &str) -> String {
        self.0.replace(PLACEHOLDER, text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fixed table of default templates, one per card kind.
///
/// Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct PromptTable {
    basic: PromptTemplate,
    cloze: PromptTemplate,
}

impl PromptTable {
    pub fn new(basic: PromptTemplate, cloze: PromptTemplate) -> Self {
        Self { basic, cloze }
    }

    pub fn get(&self, kind: CardKind) -> &PromptTemplate {
        match kind {
            CardKind::Basic => &self.basic,
            CardKind::Cloze => &self.cloze,
        }
    }

    /// Render the prompt for `kind`, preferring a caller-supplied template.
    pub fn render(
        &self,
        kind: CardKind,
        text: &str,
        custom: Option<&str>,
    ) -> Result<String, TemplateError> {
        match custom {
            Some(custom) => Ok(PromptTemplate::new(custom)?.render(text)),
            None => Ok(self.get(kind).render(text)),
        }
    }
}

impl Default for PromptTable {
    fn default() -> Self {
        Self::new(
            PromptTemplate(DEFAULT_QA_TEMPLATE.to_string()),
            PromptTemplate(DEFAULT_CLOZE_TEMPLATE.to_string()),
        )
    }
}
