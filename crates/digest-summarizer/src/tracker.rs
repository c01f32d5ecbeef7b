//! Completion tracking from the summary document
//!
//! The summary document is the only record of what has been processed. Each
//! run re-parses it and collects the `[[name]]` identifiers of per-file
//! entries, turning them back into file names (`name.md`).

use crate::parser::parse_summary_file;
use digest_domain::JournalEntry;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension appended to identifiers to recover source file names
pub const ENTRY_FILE_EXTENSION: &str = ".md";

/// File names already summarized in the output document
#[derive(Debug, Clone, Default)]
pub struct CompletionSet {
    done: HashSet<String>,
}

impl CompletionSet {
    /// Build the set from the summary document at `path`.
    ///
    /// A missing or unreadable document gives an empty set.
    pub fn load(path: &Path) -> Self {
        let set = Self::from_entries(&parse_summary_file(path));
        if !set.is_empty() {
            info!(
                "{} entries already summarized in {}",
                set.len(),
                path.display()
            );
        }
        set
    }

    /// Build the set from already-parsed summary records
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let done = entries
            .iter()
            .filter_map(|entry| entry.filename.as_ref())
            .map(|name| format!("{}{}", name, ENTRY_FILE_EXTENSION))
            .collect();
        Self { done }
    }

    /// Whether `file_name` (with extension) has a summary
    pub fn contains(&self, file_name: &str) -> bool {
        self.done.contains(file_name)
    }

    /// Whether the file at `path` has a summary, judged by its base name
    pub fn is_done(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.contains(&name.to_string_lossy()))
            .unwrap_or(false)
    }

    /// Keep only the paths that have not been summarized, in order
    pub fn filter_new(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .filter(|path| {
                let done = self.is_done(path);
                if done {
                    debug!("Already summarized: {}", path.display());
                }
                !done
            })
            .cloned()
            .collect()
    }

    /// Number of completed file names
    pub fn len(&self) -> usize {
        self.done.len()
    }

    /// Whether nothing has been completed yet
    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}
