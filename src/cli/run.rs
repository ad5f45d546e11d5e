use std::io;

use anyhow::Result;

use super::args::Command;
use crate::{
    config::ScanConfig,
    report::reporter,
    scanner::{ScanSummary, scan_directory},
};

/// Dispatch to the command handler.
pub fn run(command: Command) -> Result<ScanSummary> {
    match command {
        Command::Check(cmd) => check(&ScanConfig::from(cmd)),
    }
}

/// Scan `config.root`, streaming findings to stdout.
pub fn check(config: &ScanConfig) -> Result<ScanSummary> {
    config.validate()?;

    let stdout = io::stdout();
    let mut report = reporter(config.format, stdout.lock());
    scan_directory(&config.root, report.as_mut(), config.verbose)
}
