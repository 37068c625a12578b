//! Docblock CLI - generate doc comment scaffolding from the command line.
//!
//! Parses arguments, resolves settings, installs logging, and dispatches
//! the selected command.

use clap::Parser;
use docblock_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Settings feed the log filter, so they are resolved before logging starts.
    let settings = commands::resolve_settings(&args);
    let log_level = settings
        .as_ref()
        .ok()
        .and_then(|settings| settings.log_level.clone());

    logger::init_logger(args.verbose, args.quiet, args.no_color, log_level.as_deref());
    ui::init_colors(args.no_color);

    let result = settings.and_then(|settings| match args.command {
        cli::Command::Generate(generate_args) => {
            commands::generate_execute(generate_args, settings)
        }
        cli::Command::Config(config_args) => commands::config_execute(config_args, settings),
    });

    result.map_err(error::cli_error_to_miette)
}
