//! Output formatting for CLI commands.
//!
//! Kept apart from the commands so the engine stays usable as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    print_to(result, verbose, &mut stdout);
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    if summary.outputs.is_empty() {
        writeln!(
            writer,
            "{}",
            "No source files matched - no translation files written".yellow()
        )
        .ok();
    }

    let verb = if summary.is_dry_run {
        "Would write"
    } else {
        "Wrote"
    };
    for output in &summary.outputs {
        writeln!(
            writer,
            "{} {} {} ({}: {} added, {} kept)",
            SUCCESS_MARK.green(),
            verb,
            output.path.display().to_string().bold(),
            output.language,
            output.added,
            output.kept
        )
        .ok();
    }

    writeln!(
        writer,
        "Scanned {}, found {} ({} unique)",
        plural(summary.files_scanned, "file", "files"),
        plural(summary.keys_found, "key", "keys"),
        summary.unique_keys
    )
    .ok();

    if summary.skipped_count > 0 {
        let hint = if verbose {
            ""
        } else {
            " Use --verbose for details."
        };
        eprintln!(
            "{} {} could not be accessed.{}",
            "warning:".bold().yellow(),
            plural(summary.skipped_count, "path", "paths"),
            hint
        );
    }

    if summary.is_dry_run && !summary.outputs.is_empty() {
        writeln!(writer, "Run without {} to write these files.", "--dry-run".cyan()).ok();
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
        Some(error) => eprintln!("{} {}", FAILURE_MARK.red(), error.red()),
    }
}
