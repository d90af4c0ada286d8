//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan source files and write one translation file per language
//! - `init`: Create a starter configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Config file to use instead of searching for .transpreprc.json
    #[arg(short, long, env = "TRANSPREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory to write translation files to (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Report what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys and write merged translation files
    Extract(ExtractCommand),
    /// Initialize a new .transpreprc.json configuration file
    Init,
}
