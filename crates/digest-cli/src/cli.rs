//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Summarize journal entries using a local Ollama model.
///
/// Summaries are appended to the output Markdown file. Entry files that
/// already have a summary there are skipped.
#[derive(Debug, Parser)]
#[command(name = "journal-digest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Org-mode journal containing multiple `** Journal Entry <DATE>` entries
    #[arg(short = 'j', long = "input-journal-org", value_name = "PATH")]
    pub input_journal_org: Option<PathBuf>,

    /// One or more journal entry files in Markdown format
    #[arg(short = 'e', long = "input-entry-md", value_name = "PATH", num_args = 1..)]
    pub input_entry_md: Vec<PathBuf>,

    /// Output Markdown summary file (appended to)
    #[arg(short = 'o', long = "output-md", value_name = "PATH")]
    pub output_md: PathBuf,

    /// Ollama model name to use for summarization
    #[arg(short, long, env = "DIGEST_MODEL")]
    pub model: Option<String>,

    /// Base URL of the Ollama API
    #[arg(short, long, env = "DIGEST_OLLAMA_URL")]
    pub url: Option<String>,

    /// Prompt template (use {entry_text} as placeholder)
    #[arg(long)]
    pub prompt: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
