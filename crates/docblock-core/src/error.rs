//! Error types for declaration recovery

use thiserror::Error;

/// Errors raised while turning source text into a doc block.
///
/// None of these reach the caller of [`crate::DocBlockr::run`]: a failed
/// parse degrades to an empty block and a bad notation rule is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Declaration text was larger than the parsers accept
    #[error("declaration is {len} bytes, longer than the {max} byte limit")]
    DeclarationTooLong { len: usize, max: usize },

    /// A `notationMap` regex failed to compile
    #[error("invalid notation pattern '{pattern}': {message}")]
    InvalidNotationPattern { pattern: String, message: String },

    /// No parser is registered for the language identifier
    #[error("no declaration parser registered for '{0}'")]
    UnknownLanguage(String),
}

impl EngineError {
    /// Create an InvalidNotationPattern error
    pub fn invalid_notation_pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidNotationPattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
