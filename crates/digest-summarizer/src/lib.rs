//! Digest Summarizer
//!
//! Summarizes journal entries with a local LLM and appends the results to a
//! cumulative Markdown document, skipping entries summarized by earlier runs.
//!
//! # Overview
//!
//! Two journal layouts are supported: an org-mode outline where each
//! `** Journal Entry <DATE>` heading starts an entry, and a set of note files
//! with one entry per file. The output document doubles as the completion
//! record: per-file entries are written under a `[[name]]` heading, and the
//! next run re-parses those headings to skip files already done.
//!
//! # Architecture
//!
//! ```text
//! input → parser → tracker filter → confirm → probe → summarizer → writer
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use digest_summarizer::{
//!     AutoConfirm, BatchRunner, RunRequest, Summarizer, SummarizerConfig,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SummarizerConfig::default();
//! let summarizer = Summarizer::new(config.provider()?, config.template()?);
//!
//! let request = RunRequest {
//!     outline: None,
//!     entry_files: vec!["notes/2024-01-01.md".into()],
//!     output: "journal-summary.md".into(),
//! };
//!
//! let report = BatchRunner::new(summarizer, request)
//!     .run(&mut AutoConfirm)
//!     .await?;
//!
//! println!("Processed {}/{} entries", report.processed, report.total);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
pub mod parser;
mod prompt;
mod runner;
mod summarize;
mod tracker;
mod writer;

#[cfg(test)]
mod tests;

pub use config::SummarizerConfig;
pub use error::{Result, SummarizerError};
pub use parser::{extract_blocks, BlockFormat, IdentifierRule};
pub use prompt::{PromptTemplate, DEFAULT_PROMPT_TEMPLATE, PLACEHOLDER};
pub use runner::{
    AbortReason, AutoConfirm, BatchRunner, Confirm, InputMode, RunOutcome, RunPhase, RunReport,
    RunRequest,
};
pub use summarize::{clean_response, Summarizer};
pub use tracker::{CompletionSet, ENTRY_FILE_EXTENSION};
pub use writer::{format_record, OutputWriter};
