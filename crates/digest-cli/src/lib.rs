//! Journal digest CLI library.
//!
//! Argument parsing, configuration resolution, the confirmation prompt and
//! console formatting for the `journal-digest` binary.

pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use confirm::PromptConfirm;
pub use error::{CliError, Result};
pub use output::{exit_code, Formatter};

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr.
///
/// `RUST_LOG` selects the level; defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
