//! Digest Domain Layer
//!
//! Core types and trait seams for the journal digest tool. Like the rest of
//! the domain layer it has no external dependencies: infrastructure (HTTP,
//! filesystem, terminal) lives in the other crates.
//!
//! ## Key Concepts
//!
//! - **Journal entry**: one item to be summarized, identified either by a
//!   heading (outline journals) or a filename (one-note-per-file journals)
//! - **LLM provider**: the text generation service an entry is sent to
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and formatting rules only
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod traits;

// Re-exports for convenience
pub use entry::{JournalEntry, UNTITLED_ENTRY};
pub use traits::LlmProvider;
