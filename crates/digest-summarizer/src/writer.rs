//! Append-only summary output

use crate::error::{Result, SummarizerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Format one summary record
pub fn format_record(heading: &str, summary: &str) -> String {
    format!("# {}\n\n{}\n\n", heading, summary)
}

/// Appends summary records to the output document.
///
/// Existing content is never rewritten; the file is created on first use.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    /// Create a writer for the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the output document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record and flush it
    pub fn append(&self, heading: &str, summary: &str) -> Result<()> {
        let write_err = |source| SummarizerError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;

        file.write_all(format_record(heading, summary).as_bytes())
            .map_err(write_err)?;
        file.flush().map_err(write_err)
    }
}
