//! Logging setup for the docblock CLI.
//!
//! Logs go to stderr so stdout carries only the generated block.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: debug for the docblock crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. `logLevel` from the resolved settings
//! 5. warnings and above

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: &[&str] = &["docblock_cli", "docblock_core", "docblock_config"];

/// Install the global tracing subscriber. Call once, before any logging.
///
/// # Example
///
/// ```rust,no_run
/// use docblock_cli::logger::init_logger;
///
/// init_logger(false, false, true, Some("debug"));
/// tracing::debug!("shown because of the logLevel fallback");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, log_level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new(directives("debug"))
    } else if quiet {
        EnvFilter::new(directives("error"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            log_level
                .and_then(|level| EnvFilter::try_new(directives(level)).ok())
                .unwrap_or_else(|| EnvFilter::new(directives("warn")))
        })
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Expand a bare level into per-crate directives; anything that already
/// names a target (`docblock_core=trace`) is used as is.
pub fn directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    CRATES
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Whether stderr should get ANSI colours.
///
/// `NO_COLOR` disables colours, `FORCE_COLOR` enables them, otherwise the
/// terminal is asked.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
