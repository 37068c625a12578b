//! Miette diagnostic conversion for CLI errors.

use docblock_config::ConfigError;
use miette::Report;

use crate::error::CliError;

/// Convert a [`CliError`] into a miette report, adding a hint where one helps.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::NotATrigger { line, found } => miette::miette!(
            "Line {} does not open a doc block: found {:?} before the cursor\n\n\
             Hint: the cursor must follow `/**`, `/*!` or `###*`; use --column to place it",
            line,
            found
        ),
        CliError::FileNotFound(path) => miette::miette!(
            "File not found: {}\n\nHint: pass `-` to read the source from stdin",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound(path) => miette::miette!(
            "Config file not found: {}\n\nHint: create docblock.toml or .docblockrc.json, or drop --config to use defaults",
            path.display()
        ),
        ConfigError::InvalidPattern { pattern, message } => miette::miette!(
            "Invalid notation pattern '{}': {}\n\nHint: notationMap regex entries use Rust regex syntax",
            pattern,
            message
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
