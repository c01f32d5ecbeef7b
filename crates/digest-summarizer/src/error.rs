//! Error types for the summarizer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for summarizer operations
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors that can occur while preparing or running a batch
#[derive(Error, Debug)]
pub enum SummarizerError {
    /// Invalid or contradictory configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input or output document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A summary record could not be appended
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// LLM provider setup error
    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<digest_llm::LlmError> for SummarizerError {
    fn from(e: digest_llm::LlmError) -> Self {
        SummarizerError::Llm(e.to_string())
    }
}
