//! Summarization client

use crate::prompt::PromptTemplate;
use digest_domain::traits::LlmProvider;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{error, info, warn};

/// `<think>...</think>` deliberation spans, across lines
static REASONING_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("reasoning span regex is valid"));

/// Strip surrounding whitespace and any reasoning spans from model output
pub fn clean_response(raw: &str) -> String {
    REASONING_SPAN.replace_all(raw.trim(), "").trim().to_string()
}

/// Turns entry text into a summary with one provider call
pub struct Summarizer<L> {
    provider: L,
    template: PromptTemplate,
}

impl<L: LlmProvider> Summarizer<L> {
    /// Create a summarizer over `provider` using `template`
    pub fn new(provider: L, template: PromptTemplate) -> Self {
        Self { provider, template }
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// The prompt template in use
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Summarize `text`.
    ///
    /// Returns `None` when the provider fails or the cleaned response is
    /// empty. The reason is logged here; callers only see that no summary
    /// was produced.
    pub async fn summarize(&self, text: &str) -> Option<String> {
        let prompt = self.template.render(text);

        info!(
            "Sending entry to LLM (model: {})",
            self.provider.model_name()
        );

        match self.provider.generate(&prompt).await {
            Ok(raw) => {
                let summary = clean_response(&raw);
                if summary.is_empty() {
                    warn!("LLM returned an empty summary");
                    None
                } else {
                    info!("Summary received ({} chars)", summary.len());
                    Some(summary)
                }
            }
            Err(e) => {
                error!("Summarization failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest_llm::MockProvider;

    fn summarizer(provider: MockProvider) -> Summarizer<MockProvider> {
        Summarizer::new(provider, PromptTemplate::new("{entry_text}").unwrap())
    }

    #[test]
    fn test_clean_response_strips_reasoning() {
        assert_eq!(
            clean_response("<think>internal</think>Final answer."),
            "Final answer."
        );
    }

    #[test]
    fn test_clean_response_multiline_and_repeated_spans() {
        let raw = "  <think>\nstep one\nstep two\n</think>\n\nShe went out.<think>more</think> Then home.  ";
        assert_eq!(clean_response(raw), "She went out. Then home.");
    }

    #[test]
    fn test_clean_response_plain_text() {
        assert_eq!(clean_response("\n  Just a summary.\n"), "Just a summary.");
    }

    #[test]
    fn test_clean_response_unclosed_tag_kept() {
        assert_eq!(clean_response("<think>never closed"), "<think>never closed");
    }

    #[test]
    fn test_summarize_renders_template() {
        let provider = MockProvider::new("ok");
        let summarizer = Summarizer::new(
            provider.clone(),
            PromptTemplate::new("Summarize: {entry_text}").unwrap(),
        );

        let summary = tokio_test::block_on(summarizer.summarize("a walk"));

        assert_eq!(summary.as_deref(), Some("ok"));
        assert_eq!(provider.prompts(), vec!["Summarize: a walk"]);
    }

    #[test]
    fn test_summarize_cleans_output() {
        let summarizer = summarizer(MockProvider::new("<think>hmm</think> Short day. "));
        let summary = tokio_test::block_on(summarizer.summarize("entry"));
        assert_eq!(summary.as_deref(), Some("Short day."));
    }

    #[test]
    fn test_summarize_provider_error_is_none() {
        let mut provider = MockProvider::default();
        provider.add_error("entry");
        let summarizer = summarizer(provider);

        assert!(tokio_test::block_on(summarizer.summarize("entry")).is_none());
    }

    #[test]
    fn test_summarize_empty_after_cleaning_is_none() {
        let summarizer = summarizer(MockProvider::new("<think>only thoughts</think>"));
        assert!(tokio_test::block_on(summarizer.summarize("entry")).is_none());
    }
}
