//! Docblock CLI - the command-line stand-in for an editor integration.
//!
//! The binary reads a source file and a cursor position, checks that the
//! text before the cursor opens a doc block, and prints (or writes back) the
//! fragment produced by [`docblock_core::DocBlockr`].
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `generate` and `config`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - coloured status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
