//! Error handling for the docblock CLI.
//!
//! Commands return [`CliError`]; `main` converts it into a miette report with
//! [`cli_error_to_miette`].

mod report;

use std::path::PathBuf;

use docblock_config::ConfigError;
use thiserror::Error;

pub use report::cli_error_to_miette;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Source file not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The text before the cursor does not open a doc block
    #[error("Line {line} does not open a doc block: found {found:?} before the cursor")]
    NotATrigger { line: usize, found: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
