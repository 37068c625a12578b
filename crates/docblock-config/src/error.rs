//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Discovery errors
    #[error("no docblock configuration found in {}", .0.display())]
    NotFound(PathBuf),

    // Value errors
    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {}", h)).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid notation pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // Layered loading errors (file syntax, type mismatches, env parsing)
    #[error("failed to resolve configuration: {0}")]
    Figment(#[from] figment::Error),
}

impl ConfigError {
    /// Shorthand for an [`ConfigError::InvalidValue`] carrying a hint.
    pub fn invalid_value(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            hint: Some(hint.into()),
        }
    }
}
