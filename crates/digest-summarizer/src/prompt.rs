//! Prompt templates for summarization

use crate::error::{Result, SummarizerError};

/// Placeholder replaced by the entry text
pub const PLACEHOLDER: &str = "{entry_text}";

/// Template used when none is configured
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Write a concise, one to three sentence summary of the following journal entry I wrote /no_think:\n\n{entry_text}";

/// A prompt with exactly one `{entry_text}` substitution point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Validate and wrap a template string.
    ///
    /// # Errors
    ///
    /// Returns `SummarizerError::Config` unless the placeholder occurs
    /// exactly once.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        match template.matches(PLACEHOLDER).count() {
            1 => Ok(Self { template }),
            0 => Err(SummarizerError::Config(format!(
                "Prompt template must contain the {} placeholder",
                PLACEHOLDER
            ))),
            n => Err(SummarizerError::Config(format!(
                "Prompt template must contain {} exactly once (found {})",
                PLACEHOLDER, n
            ))),
        }
    }

    /// Substitute `text` for the placeholder
    pub fn render(&self, text: &str) -> String {
        self.template.replacen(PLACEHOLDER, text, 1)
    }

    /// The raw template
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}
