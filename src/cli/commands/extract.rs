use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::{args::ExtractCommand, exit_status::ExitStatus};
use super::{CommandResult, CommandSummary, ExtractSummary, WrittenFile};
use crate::{
    config::{ConfigLoadResult, load_config, load_config_file},
    core::{OutputFile, PipelineEvent, SourceFile, TranslationPipeline},
    scanner::{ScanOptions, scan_files},
};

/// Scan the source root, merge keys into every language and write the results.
///
/// Nothing is written unless every language merged successfully.
pub fn extract(cmd: ExtractCommand, cwd: &Path) -> Result<CommandResult> {
    let args = cmd.args;

    let loaded = match &args.config {
        Some(path) => load_config_file(&cwd.join(path))?,
        None => load_config(cwd)?,
    };
    let ConfigLoadResult { config, .. } = &loaded;
    let base_dir = loaded.base_dir();

    let options = config
        .to_options(&base_dir)
        .with_context(|| format!("Invalid config file: {}", loaded.path.display()))?;

    let source_root = match &args.source_root {
        Some(root) => cwd.join(root),
        None => base_dir.join(&config.source_root),
    };
    if !source_root.is_dir() {
        bail!(
            "Source root '{}' is not a directory.\n\
             Hint: Check your {} 'sourceRoot' setting.",
            source_root.display(),
            crate::config::CONFIG_FILE_NAME
        );
    }

    let out_dir = match (&args.out_dir, &config.out_dir) {
        (Some(dir), _) => Some(cwd.join(dir)),
        (None, Some(dir)) => Some(base_dir.join(dir)),
        (None, None) => None,
    };

    let scan = scan_files(
        &source_root,
        &ScanOptions {
            includes: &config.includes,
            ignores: &config.ignores,
            extensions: &config.extensions,
            verbose: args.verbose,
        },
    );

    // Translation files written by an earlier run are outputs, never inputs.
    let output_root = out_dir.as_deref().unwrap_or(&source_root);
    let output_paths: HashSet<PathBuf> = options
        .languages
        .iter()
        .map(|language| output_root.join(language.destination()))
        .collect();
    let inputs: Vec<&PathBuf> = scan
        .files
        .iter()
        .filter(|path| {
            let is_output = output_paths.contains(*path);
            if is_output && args.verbose {
                eprintln!(
                    "{} not scanning output file {}",
                    "info:".bold().blue(),
                    path.display()
                );
            }
            !is_output
        })
        .collect();

    let mut pipeline = TranslationPipeline::new(options)?;
    if args.verbose {
        pipeline = pipeline.on_event(log_event);
    }

    for path in &inputs {
        let contents =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        pipeline.push(SourceFile::buffered(*path, &source_root, contents))?;
    }
    let outputs = pipeline.finish()?;

    let mut written = Vec::with_capacity(outputs.len());
    for output in &outputs {
        let target = output_target(output, out_dir.as_deref());
        if !args.dry_run {
            write_output(&target, &output.contents)?;
        }
        written.push(WrittenFile {
            language: output.language.clone(),
            path: display_path(&target, cwd),
            added: output.stats.added,
            kept: output.stats.kept,
        });
    }

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            files_scanned: inputs.len(),
            skipped_count: scan.skipped_count,
            keys_found: pipeline.keys().len(),
            unique_keys: pipeline.keys().unique_count(),
            outputs: written,
            is_dry_run: args.dry_run,
        }),
        status: ExitStatus::Success,
    })
}

fn output_target(output: &OutputFile, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir.join(output.relative()),
        None => output.path.clone(),
    }
}

/// Write a translation file, creating parent directories as needed.
///
/// Adds a trailing newline.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", contents))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

fn display_path(path: &Path, cwd: &Path) -> PathBuf {
    path.strip_prefix(cwd).unwrap_or(path).to_path_buf()
}

fn log_event(event: &PipelineEvent<'_>) {
    match event {
        PipelineEvent::FileSkipped { path } => {
            eprintln!("{} skipped {}", "info:".bold().blue(), path.display());
        }
        PipelineEvent::FileScanned { path, keys } => {
            eprintln!(
                "{} {} key(s) in {}",
                "info:".bold().blue(),
                keys,
                path.display()
            );
        }
        PipelineEvent::LanguageMerged { code, path, stats } => {
            eprintln!(
                "{} merged {} into {} ({} added, {} kept)",
                "info:".bold().blue(),
                code,
                path.display(),
                stats.added,
                stats.kept
            );
        }
    }
}
