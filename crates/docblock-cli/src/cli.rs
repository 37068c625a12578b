//! Command-line interface definition.
//!
//! - `docblock generate <FILE> --line N` - produce the block for a trigger line
//! - `docblock config` - print the resolved settings

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

/// Docblock - doc comment scaffolding for JavaScript and CoffeeScript
#[derive(Parser, Debug)]
#[command(
    name = "docblock",
    version,
    about = "Generate JSDoc-style comment blocks from the declaration below a cursor",
    long_about = "Docblock reads the lines below a `/**` trigger, recovers the declaration\n\
                  they describe, and emits a comment block with @param, @return and @type\n\
                  tags as an editor snippet or as plain text."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file to use instead of discovery
    ///
    /// Accepts docblock.toml, .docblockrc.json, any other JSON file, or a
    /// package.json with a `docblockr` field.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Directory searched for a configuration file when `--config` is absent:
    /// the directory of the source file, or the working directory.
    pub fn config_root(&self) -> PathBuf {
        match &self.command {
            Command::Generate(args) if !args.reads_stdin() => args
                .file
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
            _ => PathBuf::from("."),
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the comment block for a trigger line
    ///
    /// The text before the cursor on LINE must be `/**`, `/*!` or `###*`.
    /// Text after the cursor becomes the description.
    Generate(GenerateArgs),

    /// Print the resolved settings after validation
    Config(ConfigArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Source file, or `-` to read stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 1-based line holding the trigger
    #[arg(short, long, value_name = "N")]
    pub line: usize,

    /// 1-based cursor column on that line (defaults to the end of the line)
    #[arg(long, value_name = "C")]
    pub column: Option<usize>,

    /// Language identifier (defaults to the file extension)
    ///
    /// Examples: javascript, typescript, tsx, coffee
    #[arg(long = "lang", value_name = "ID")]
    pub language: Option<String>,

    /// Produce a single-line block such as `/** @type {Number} */`
    #[arg(long)]
    pub inline: bool,

    /// Strip snippet placeholders from the output
    #[arg(long)]
    pub plain: bool,

    /// Print the result and the recognised declaration as JSON
    #[arg(long, conflicts_with_all = ["plain", "write"])]
    pub json: bool,

    /// Write the block back into FILE in place of the text after the cursor
    #[arg(short, long)]
    pub write: bool,
}

impl GenerateArgs {
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print TOML (the docblock.toml format) instead of JSON
    #[arg(long)]
    pub toml: bool,
}
