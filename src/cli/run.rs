use std::{env, path::Path};

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and exit status
/// - `Err` if the command fails (e.g., config not found, unreadable translations)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir()?;
    run_in(command, &cwd)
}

pub fn run_in(command: Option<Command>, cwd: &Path) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd, cwd),
        Some(Command::Init) => init(cwd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
