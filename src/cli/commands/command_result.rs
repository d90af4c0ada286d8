use std::path::PathBuf;

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// One translation file produced by `extract`.
#[derive(Debug)]
pub struct WrittenFile {
    pub language: String,
    /// Path as shown to the user.
    pub path: PathBuf,
    pub added: usize,
    pub kept: usize,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    pub skipped_count: usize,
    pub keys_found: usize,
    pub unique_keys: usize,
    pub outputs: Vec<WrittenFile>,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    /// `None` when the config was created, otherwise why it was not.
    pub error: Option<String>,
}

/// Result of running a transprep command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}
