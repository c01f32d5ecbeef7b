//! Interactive confirmation prompt.

use crate::output::Formatter;
use digest_domain::JournalEntry;
use digest_summarizer::Confirm;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Lists the pending entries and asks `y/n` on a terminal.
///
/// Only `y` (any case, surrounding whitespace ignored) proceeds.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
    formatter: Formatter,
}

impl PromptConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read the answer from stdin.
    pub fn stdio(formatter: Formatter) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), formatter)
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    /// Prompt on `output` and read the answer from `input`.
    pub fn new(input: R, output: W, formatter: Formatter) -> Self {
        Self {
            input,
            output,
            formatter,
        }
    }

    fn ask(&mut self, entries: &[JournalEntry]) -> io::Result<bool> {
        writeln!(self.output, "\n{}", self.formatter.entry_list(entries))?;
        write!(self.output, "Do you want to proceed with summarization? (y/n): ")?;
        self.output.flush()?;

        let mut response = String::new();
        self.input.read_line(&mut response)?;
        Ok(response.trim().eq_ignore_ascii_case("y"))
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, entries: &[JournalEntry]) -> bool {
        self.ask(entries).unwrap_or_else(|e| {
            warn!("Could not read confirmation: {}", e);
            false
        })
    }
}
