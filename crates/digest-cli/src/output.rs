//! Output formatting for the CLI.

use colored::*;
use digest_domain::JournalEntry;
use digest_summarizer::{AbortReason, RunOutcome, RunReport};
use std::path::Path;

/// Output formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the list of entries awaiting confirmation.
    pub fn entry_list(&self, entries: &[JournalEntry]) -> String {
        let mut out = format!("The following {} entries will be processed:\n", entries.len());
        for entry in entries {
            out.push_str(&format!("  - {}\n", self.colorize(&entry.label(), "cyan")));
        }
        out
    }

    /// Format the final report of a run.
    pub fn report(&self, report: &RunReport, output: &Path) -> String {
        let counts = format!("Processed {}/{} entries", report.processed, report.total);
        match &report.outcome {
            RunOutcome::Done => self.success(&format!(
                "Summarization complete. {}. Summaries appended to {}",
                counts,
                output.display()
            )),
            RunOutcome::NothingToDo => self.info(&format!(
                "No new journal entries found or input could not be read. {}",
                counts
            )),
            RunOutcome::Aborted(AbortReason::Declined) => {
                self.warning(&format!("Exiting without processing. {}", counts))
            }
            RunOutcome::Aborted(AbortReason::ServiceUnreachable(message)) => self.error(&format!(
                "Could not reach the Ollama server ({}). Is it running? {}",
                message, counts
            )),
            RunOutcome::Aborted(AbortReason::SummaryFailed { label }) => self.error(&format!(
                "Failed to generate summary for {}. {}",
                label, counts
            )),
            RunOutcome::Aborted(AbortReason::WriteFailed { label, message }) => self.error(
                &format!("Failed to write summary for {} ({}). {}", label, message, counts),
            ),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Process exit code for a finished run.
///
/// Declining the confirmation is a normal exit; any other abort is a failure.
pub fn exit_code(report: &RunReport) -> i32 {
    match report.outcome {
        RunOutcome::Done | RunOutcome::NothingToDo => 0,
        RunOutcome::Aborted(AbortReason::Declined) => 0,
        RunOutcome::Aborted(_) => 1,
    }
}
