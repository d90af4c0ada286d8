use std::{fs, path::Path};

use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, starter_config_json};

pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary {
                error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
            }),
            status: ExitStatus::Failure,
        });
    }

    fs::write(&config_path, format!("{}\n", starter_config_json()?))?;
    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { error: None }),
        status: ExitStatus::Success,
    })
}
