//! Generate command implementation.
//!
//! Plays the editor's part: finds the trigger at the cursor, gathers the
//! lines below it, runs the engine, and hands the fragment to a sink
//! (stdout, JSON, or the file itself).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use docblock_config::Settings;
use docblock_core::snippet::strip;
use docblock_core::{is_existing_comment, is_trigger, DocBlockr, Invocation, Parsed};
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Language used when neither `--lang` nor a file extension names one.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// The trigger line split at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSite {
    /// 0-based index of the trigger line.
    pub index: usize,
    pub preceding: String,
    pub trailing: String,
    pub base_indent: String,
}

/// Split line `line` (1-based) at `column` (1-based, in characters; `None`
/// means end of line) and check that the text before the cursor is a trigger.
pub fn locate(lines: &[&str], line: usize, column: Option<usize>) -> Result<TriggerSite> {
    if line == 0 || line > lines.len() {
        return Err(CliError::invalid_argument(format!(
            "line {} is out of range (the source has {} lines)",
            line,
            lines.len()
        )));
    }
    let text = lines[line - 1];

    let split = match column {
        Some(0) => return Err(CliError::invalid_argument("columns start at 1")),
        Some(column) => text
            .char_indices()
            .nth(column - 1)
            .map_or(text.len(), |(offset, _)| offset),
        None => text.len(),
    };
    let (preceding, trailing) = text.split_at(split);

    if !is_trigger(preceding) {
        return Err(CliError::NotATrigger {
            line,
            found: preceding.to_string(),
        });
    }

    let base_indent: String = preceding.chars().take_while(|c| c.is_whitespace()).collect();
    Ok(TriggerSite {
        index: line - 1,
        preceding: preceding.to_string(),
        trailing: trailing.to_string(),
        base_indent,
    })
}

/// Language identifier implied by a file name.
pub fn language_for(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Build the engine input for a located trigger.
pub fn invocation(site: &TriggerSite, lines: &[&str], language: &str, inline: bool) -> Invocation {
    let lookahead = &lines[site.index + 1..];
    Invocation::new(language, lookahead.iter().copied())
        .with_trailing(site.trailing.as_str())
        .with_inline(inline)
        .with_inside_comment(lookahead.first().is_some_and(|next| is_existing_comment(next)))
        .with_base_indent(site.base_indent.as_str())
}

/// Replace the trigger line with `preceding + fragment`, keeping the
/// document's line endings.
pub fn rewrite(source: &str, site: &TriggerSite, fragment: &str) -> String {
    let newline = if source.contains("\r\n") { "\r\n" } else { "\n" };
    let replaced = format!("{}{}", site.preceding, fragment).replace('\n', newline);

    let mut lines: Vec<&str> = source.lines().collect();
    lines[site.index] = &replaced;

    let mut out = lines.join(newline);
    if source.ends_with('\n') {
        out.push_str(newline);
    }
    out
}

/// Execute the generate command.
///
/// # Errors
///
/// Fails when the source cannot be read, the line is out of range, or the
/// text before the cursor is not a trigger.
pub fn execute(args: GenerateArgs, settings: Settings) -> Result<()> {
    if args.write && args.reads_stdin() {
        return Err(CliError::invalid_argument("--write needs a file, not stdin"));
    }

    let source = read_source(&args)?;
    let lines: Vec<&str> = source.lines().collect();
    let site = locate(&lines, args.line, args.column)?;

    let language = args
        .language
        .clone()
        .unwrap_or_else(|| language_for(&args.file));
    debug!(language = %language, line = args.line, "generating doc block");

    let engine = DocBlockr::new(settings);
    let output = engine.run(&invocation(&site, &lines, &language, args.inline));
    debug!(parsed = ?output.parsed, "engine finished");
    if output.parsed == Some(Parsed::NoMatch) && !engine.settings().simple_mode {
        ui::warning("No declaration recognised below the trigger; emitting an empty block");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if args.write {
        let updated = rewrite(&source, &site, &strip(&output.text));
        fs::write(&args.file, updated)?;
        ui::success(&format!(
            "Wrote doc block to {}:{}",
            args.file.display(),
            args.line
        ));
    } else if args.plain {
        println!("{}", strip(&output.text));
    } else {
        println!("{}", output.text);
    }

    Ok(())
}

fn read_source(args: &GenerateArgs) -> Result<String> {
    if args.reads_stdin() {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    if !args.file.is_file() {
        return Err(CliError::FileNotFound(args.file.clone()));
    }
    Ok(fs::read_to_string(&args.file)?)
}
