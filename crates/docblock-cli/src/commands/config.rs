//! Config command implementation.

use docblock_config::Settings;

use crate::cli::ConfigArgs;
use crate::error::Result;
use crate::ui;

/// Print the resolved settings to stdout.
pub fn execute(args: ConfigArgs, settings: Settings) -> Result<()> {
    let rendered = if args.toml {
        toml::to_string_pretty(&settings)?
    } else {
        serde_json::to_string_pretty(&settings)?
    };
    println!("{}", rendered.trim_end());
    ui::success("Configuration is valid");
    Ok(())
}
