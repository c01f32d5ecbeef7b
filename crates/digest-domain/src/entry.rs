//! Journal entries - the unit of work

/// Label used when an entry carries neither a filename nor a heading
pub const UNTITLED_ENTRY: &str = "(untitled entry)";

/// One journal item in normalized form.
///
/// Outline journals produce entries identified by `heading` (the date text of
/// the entry marker). One-note-per-file journals produce entries identified by
/// `filename` (the file stem). Both fields exist on every value; the one not
/// carrying the identity is `None`.
///
/// Entries are read-only once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Display label, e.g. the date string of an outline entry
    pub heading: Option<String>,

    /// Stable identifier derived from a source file's stem
    pub filename: Option<String>,

    /// Raw body text
    pub content: String,
}

impl JournalEntry {
    /// Create an entry with explicit fields
    pub fn new(
        heading: Option<String>,
        filename: Option<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            heading,
            filename,
            content: content.into(),
        }
    }

    /// Create an outline-format entry identified by its heading
    pub fn dated(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Some(heading.into()), None, content)
    }

    /// Create a per-file entry identified by its file stem
    pub fn from_file(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(None, Some(filename.into()), content)
    }

    /// Whether the entry has any body text to summarize
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Label shown when listing entries for confirmation.
    ///
    /// `<filename>.md` when a filename is known, the heading otherwise.
    pub fn label(&self) -> String {
        match (&self.filename, &self.heading) {
            (Some(filename), _) => format!("{}.md", filename),
            (None, Some(heading)) => heading.clone(),
            (None, None) => UNTITLED_ENTRY.to_string(),
        }
    }

    /// Heading written above the entry's summary in the output document.
    ///
    /// Per-file entries are written as a wiki link (`[[name]]`) so the
    /// identifier can be recovered when the output is parsed again.
    pub fn output_heading(&self) -> String {
        match (&self.filename, &self.heading) {
            (Some(filename), _) => format!("[[{}]]", filename),
            (None, Some(heading)) => heading.clone(),
            (None, None) => UNTITLED_ENTRY.to_string(),
        }
    }
}
