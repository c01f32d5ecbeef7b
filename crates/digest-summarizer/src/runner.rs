//! Batch runner
//!
//! Drives one invocation: collect entries that still need a summary, ask the
//! operator to confirm, probe the service, then summarize entries one at a
//! time, appending each result to the output document. The first entry that
//! fails stops the batch; records already written stay in place, so the next
//! run picks up where this one stopped (for per-file input).

use crate::error::{Result, SummarizerError};
use crate::parser::{parse_outline_file, read_entry_files};
use crate::summarize::Summarizer;
use crate::tracker::CompletionSet;
use crate::writer::OutputWriter;
use digest_domain::traits::LlmProvider;
use digest_domain::JournalEntry;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Where entries come from in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// One org-mode journal holding many entries
    Outline(PathBuf),
    /// One entry per file
    Files(Vec<PathBuf>),
}

impl InputMode {
    /// Select the input mode from the two mutually exclusive options.
    ///
    /// # Errors
    ///
    /// `SummarizerError::Config` if both or neither are given.
    pub fn from_args(outline: Option<PathBuf>, entry_files: Vec<PathBuf>) -> Result<Self> {
        match (outline, entry_files.is_empty()) {
            (Some(_), false) => Err(SummarizerError::Config(
                "Provide either an org journal or entry files, not both".to_string(),
            )),
            (Some(path), true) => Ok(InputMode::Outline(path)),
            (None, false) => Ok(InputMode::Files(entry_files)),
            (None, true) => Err(SummarizerError::Config(
                "No input given: provide an org journal or entry files".to_string(),
            )),
        }
    }
}

/// Operator confirmation before any request is sent
pub trait Confirm {
    /// Return true to proceed with `entries`
    fn confirm(&mut self, entries: &[JournalEntry]) -> bool;
}

/// Confirms every batch without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _entries: &[JournalEntry]) -> bool {
        true
    }
}

/// Phases of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Validating input and gathering entries
    Collecting,
    /// Waiting for the operator
    Confirming,
    /// Probing the inference service
    CheckingService,
    /// Summarizing entries
    Processing,
    /// Finished normally
    Done,
    /// Stopped early
    Aborted,
}

/// Why a run stopped early
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The operator did not confirm
    Declined,
    /// The reachability probe failed
    ServiceUnreachable(String),
    /// No summary could be produced for an entry
    SummaryFailed {
        /// Label of the failed entry
        label: String,
    },
    /// A summary could not be appended to the output document
    WriteFailed {
        /// Label of the failed entry
        label: String,
        /// Underlying error message
        message: String,
    },
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every selected entry was handled
    Done,
    /// There were no new entries
    NothingToDo,
    /// The run stopped early
    Aborted(AbortReason),
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Entries summarized and written
    pub processed: usize,
    /// Entries selected for the batch
    pub total: usize,
    /// How the run ended
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Whether the run ended without an abort
    pub fn is_success(&self) -> bool {
        !matches!(self.outcome, RunOutcome::Aborted(_))
    }
}

/// Inputs and output of one run
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Org-mode journal path
    pub outline: Option<PathBuf>,
    /// Per-file entry paths
    pub entry_files: Vec<PathBuf>,
    /// Summary document to append to
    pub output: PathBuf,
}

/// Runs one batch against a provider
pub struct BatchRunner<L> {
    summarizer: Summarizer<L>,
    request: RunRequest,
    writer: OutputWriter,
    phase: RunPhase,
}

impl<L: LlmProvider> BatchRunner<L> {
    /// Create a runner for `request`
    pub fn new(summarizer: Summarizer<L>, request: RunRequest) -> Self {
        let writer = OutputWriter::new(request.output.clone());
        Self {
            summarizer,
            request,
            writer,
            phase: RunPhase::Collecting,
        }
    }

    /// Current phase; `Done` or `Aborted` once `run` returns
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Execute the batch.
    ///
    /// Only configuration errors are returned as `Err`; everything else is
    /// reported through [`RunReport::outcome`].
    pub async fn run<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> Result<RunReport> {
        self.enter(RunPhase::Collecting);
        let entries = match self.collect() {
            Ok(entries) => entries,
            Err(e) => {
                self.enter(RunPhase::Aborted);
                return Err(e);
            }
        };
        let total = entries.len();

        if entries.is_empty() {
            info!("No new journal entries found");
            self.enter(RunPhase::Done);
            return Ok(RunReport {
                processed: 0,
                total: 0,
                outcome: RunOutcome::NothingToDo,
            });
        }
        info!("Found {} journal entries to process", total);

        self.enter(RunPhase::Confirming);
        if !confirm.confirm(&entries) {
            info!("Exiting without processing");
            return Ok(self.abort(0, total, AbortReason::Declined));
        }

        self.enter(RunPhase::CheckingService);
        if let Err(e) = self.summarizer.provider().health_check().await {
            error!("LLM service is not reachable: {}", e);
            return Ok(self.abort(0, total, AbortReason::ServiceUnreachable(e.to_string())));
        }

        self.enter(RunPhase::Processing);
        let mut processed = 0;
        for (idx, entry) in entries.iter().enumerate() {
            let heading = entry.output_heading();
            info!("Processing entry {}/{} (heading: {})", idx + 1, total, heading);

            if !entry.has_content() {
                warn!("Skipping entry with empty content");
                continue;
            }

            let Some(summary) = self.summarizer.summarize(&entry.content).await else {
                error!("Failed to generate summary for {}; stopping", entry.label());
                let reason = AbortReason::SummaryFailed {
                    label: entry.label(),
                };
                return Ok(self.abort(processed, total, reason));
            };

            if let Err(e) = self.writer.append(&heading, &summary) {
                error!("{}; stopping", e);
                let reason = AbortReason::WriteFailed {
                    label: entry.label(),
                    message: e.to_string(),
                };
                return Ok(self.abort(processed, total, reason));
            }

            info!("Summary appended to {}", self.writer.path().display());
            processed += 1;
        }

        self.enter(RunPhase::Done);
        info!(
            "Summarization complete. Processed {}/{} entries",
            processed, total
        );

        Ok(RunReport {
            processed,
            total,
            outcome: RunOutcome::Done,
        })
    }

    fn collect(&self) -> Result<Vec<JournalEntry>> {
        let mode = InputMode::from_args(
            self.request.outline.clone(),
            self.request.entry_files.clone(),
        )?;

        let entries = match mode {
            InputMode::Outline(path) => parse_outline_file(&path),
            InputMode::Files(paths) => {
                let completed = CompletionSet::load(&self.request.output);
                let pending = completed.filter_new(&paths);
                if pending.len() < paths.len() {
                    info!(
                        "Skipping {} already summarized file(s)",
                        paths.len() - pending.len()
                    );
                }
                read_entry_files(&pending)
            }
        };

        Ok(entries)
    }

    fn abort(&mut self, processed: usize, total: usize, reason: AbortReason) -> RunReport {
        self.enter(RunPhase::Aborted);
        warn!("Run aborted after {}/{} entries: {:?}", processed, total, reason);
        RunReport {
            processed,
            total,
            outcome: RunOutcome::Aborted(reason),
        }
    }

    fn enter(&mut self, phase: RunPhase) {
        debug!("Run phase: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
