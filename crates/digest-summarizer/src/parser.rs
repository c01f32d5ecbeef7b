//! Block extraction for journal and summary documents
//!
//! Outline journals and the summary output share one layout: a marker line
//! opens a block and the body runs until the next marker line of the same
//! kind. [`extract_blocks`] handles both; a [`BlockFormat`] supplies the
//! marker pattern and how to pull an identifier out of the heading.

use crate::error::{Result, SummarizerError};
use digest_domain::JournalEntry;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, error, warn};

/// `** Journal Entry <DATE>`; group 1 is the date text
static OUTLINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\*\* Journal Entry <(.*?)>[ \t\r]*$").expect("outline marker regex is valid")
});

/// `# <heading>`; group 1 is the heading text
static SUMMARY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").expect("summary marker regex is valid"));

/// `[[identifier]]` anywhere in a heading
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("wiki link regex is valid"));

/// How a block heading yields an entry identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRule {
    /// Headings carry no identifier
    None,
    /// The first `[[name]]` in the heading is the identifier
    WikiLink,
}

impl IdentifierRule {
    fn extract(self, heading: &str) -> Option<String> {
        match self {
            IdentifierRule::None => None,
            IdentifierRule::WikiLink => WIKI_LINK
                .captures(heading)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|id| !id.is_empty()),
        }
    }
}

/// Marker pattern plus identifier rule for one document layout
#[derive(Debug, Clone)]
pub struct BlockFormat {
    marker: &'static Regex,
    identifier: IdentifierRule,
}

impl BlockFormat {
    /// Org-mode journal: `** Journal Entry <DATE>` headings
    pub fn outline() -> Self {
        Self {
            marker: &OUTLINE_MARKER,
            identifier: IdentifierRule::None,
        }
    }

    /// Summary document: `# heading` records, identified by `[[name]]`
    pub fn summary() -> Self {
        Self {
            marker: &SUMMARY_MARKER,
            identifier: IdentifierRule::WikiLink,
        }
    }
}

/// Split `text` into entries, in document order.
///
/// The body of each block is trimmed; blocks whose body is empty after
/// trimming are dropped. Markers only count at the start of a line.
pub fn extract_blocks(text: &str, format: &BlockFormat) -> Vec<JournalEntry> {
    let markers: Vec<_> = format.marker.captures_iter(text).collect();
    let mut entries = Vec::with_capacity(markers.len());

    for (idx, caps) in markers.iter().enumerate() {
        let Some(line) = caps.get(0) else { continue };
        let heading = caps.get(1).map_or("", |m| m.as_str()).trim();

        let body_end = markers
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        let body = text[line.end()..body_end].trim();

        if body.is_empty() {
            debug!("Skipping block '{}' with empty body", heading);
            continue;
        }

        let filename = format.identifier.extract(heading);
        let heading = Some(heading.to_string());
        entries.push(JournalEntry::new(heading, filename, body));
    }

    entries
}

/// Read a whole document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SummarizerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse an org-mode journal file.
///
/// A missing or unreadable file is logged and yields no entries.
pub fn parse_outline_file(path: &Path) -> Vec<JournalEntry> {
    match read_document(path) {
        Ok(text) => extract_blocks(&text, &BlockFormat::outline()),
        Err(e) => {
            log_read_failure(path, &e);
            Vec::new()
        }
    }
}

/// Parse a previously written summary document.
///
/// A missing file is the normal first-run case and is only noted at debug
/// level; other read failures are logged as errors. Both yield no entries.
pub fn parse_summary_file(path: &Path) -> Vec<JournalEntry> {
    match read_document(path) {
        Ok(text) => extract_blocks(&text, &BlockFormat::summary()),
        Err(SummarizerError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!("No existing summary document at {}", path.display());
            Vec::new()
        }
        Err(e) => {
            log_read_failure(path, &e);
            Vec::new()
        }
    }
}

/// Read one entry per file.
///
/// The identifier is the file stem and the content is the full, untrimmed
/// text. Files that cannot be read are logged and left out.
pub fn read_entry_files(paths: &[PathBuf]) -> Vec<JournalEntry> {
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        let Some(stem) = path.file_stem() else {
            warn!("Skipping {}: no file name", path.display());
            continue;
        };

        debug!("Reading file: {}", path.display());
        match read_document(path) {
            Ok(content) => {
                entries.push(JournalEntry::from_file(stem.to_string_lossy(), content));
            }
            Err(e) => log_read_failure(path, &e),
        }
    }

    entries
}

fn log_read_failure(path: &Path, err: &SummarizerError) {
    match err {
        SummarizerError::Io { source, .. } if source.kind() == ErrorKind::NotFound => {
            error!("Input file not found at {}", path.display());
        }
        other => error!("{}", other),
    }
}
