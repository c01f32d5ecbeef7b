//! Configuration for the summarizer

use crate::error::{Result, SummarizerError};
use crate::prompt::{PromptTemplate, DEFAULT_PROMPT_TEMPLATE};
use digest_llm::ollama::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use digest_llm::OllamaProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Model name passed to the inference service
    pub model: String,

    /// Base address of the Ollama service
    pub ollama_url: String,

    /// Prompt template containing `{entry_text}` once
    pub prompt_template: String,

    /// Maximum time for a single generation call (seconds)
    pub request_timeout_secs: u64,

    /// Maximum time for the reachability probe (seconds)
    pub probe_timeout_secs: u64,
}

impl SummarizerConfig {
    /// Get the generation timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get the probe timeout as a Duration
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.ollama_url.trim().is_empty() {
            return Err("ollama_url must not be empty".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.probe_timeout_secs == 0 {
            return Err("probe_timeout_secs must be greater than 0".to_string());
        }
        PromptTemplate::new(self.prompt_template.as_str()).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Parsed prompt template
    pub fn template(&self) -> Result<PromptTemplate> {
        PromptTemplate::new(self.prompt_template.as_str())
    }

    /// Build the Ollama provider described by this configuration
    pub fn provider(&self) -> Result<OllamaProvider> {
        Ok(OllamaProvider::try_new(self.ollama_url.as_str(), self.model.as_str())?
            .with_timeout(self.request_timeout())
            .with_probe_timeout(self.probe_timeout()))
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| SummarizerError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SummarizerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            ollama_url: DEFAULT_ENDPOINT.to_string(),
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}
