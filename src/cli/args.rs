//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan a directory for `<Image>` elements without `alt`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{
    config::{ROOT_ENV_VAR, ScanConfig},
    report::OutputFormat,
};

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
            Some(Command::Check(cmd)) => cmd.verbose,
            None => false,
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Directory to scan
    #[arg(env = ROOT_ENV_VAR)]
    pub root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<CheckCommand> for ScanConfig {
    fn from(cmd: CheckCommand) -> Self {
        Self {
            root: cmd.root,
            format: cmd.format,
            verbose: cmd.verbose,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report <Image> elements that have no alt attribute
    Check(CheckCommand),
}
