//! Configuration management for the CLI.
//!
//! Values are resolved in order: command-line flags, then the config file,
//! then built-in defaults.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use digest_summarizer::{InputMode, SummarizerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model, service and prompt defaults
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".journal-digest").join("config.toml"))
    }

    /// Resolve the configuration for an invocation.
    ///
    /// The input options are checked first, so a conflicting invocation is
    /// rejected before any config file is read.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        InputMode::from_args(cli.input_journal_org.clone(), cli.input_entry_md.clone())?;

        let mut config = Self::load(cli.config.as_deref())?;
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default file is used
    /// when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(model) = &cli.model {
            self.summarizer.model = model.clone();
        }
        if let Some(url) = &cli.url {
            self.summarizer.ollama_url = url.clone();
        }
        if let Some(prompt) = &cli.prompt {
            self.summarizer.prompt_template = prompt.clone();
        }
        if cli.no_color {
            self.settings.color = false;
        }
    }

    /// Validate the resolved configuration.
    pub fn validate(&self) -> Result<()> {
        self.summarizer.validate().map_err(CliError::Config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}
