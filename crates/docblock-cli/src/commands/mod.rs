//! Command implementations.
//!
//! - [`generate`] - produce the block for a trigger line
//! - [`config`] - print the resolved settings

pub mod config;
pub mod generate;

use docblock_config::{load_settings, validate, Settings};
use tracing::debug;

use crate::cli::Cli;
use crate::error::Result;

pub use config::execute as config_execute;
pub use generate::execute as generate_execute;

/// Load settings for this invocation and validate them.
///
/// `--config` must name an existing file; otherwise the directory from
/// [`Cli::config_root`] is searched and defaults apply when nothing is found.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let root = cli.config_root();
    let settings = load_settings(cli.config.as_deref(), &root)?;
    validate(&settings)?;
    debug!(root = %root.display(), "resolved settings");
    Ok(settings)
}
