use anyhow::Result;
use colored::Colorize;

pub use args::{Arguments, CheckCommand, Command};
pub use exit_status::ExitStatus;
pub use run::check;

use crate::scanner::ScanSummary;

mod args;
mod exit_status;
mod run;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(command) = args.with_command_or_help().and_then(|args| args.command) else {
        return Ok(ExitStatus::Success);
    };

    let summary = run::run(command)?;
    if verbose {
        print_summary(&summary);
    }

    Ok(ExitStatus::from(&summary))
}

/// Summary goes to stderr so stdout carries nothing but findings.
fn print_summary(summary: &ScanSummary) {
    let files = |n: usize| if n == 1 { "file" } else { "files" };

    if summary.findings == 0 {
        eprintln!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - no missing alt attributes",
                summary.files_checked,
                files(summary.files_checked)
            )
            .green()
        );
    } else {
        eprintln!(
            "{} {} missing alt {} in {} {} ({} {} checked)",
            FAILURE_MARK.red(),
            summary.findings,
            if summary.findings == 1 {
                "attribute"
            } else {
                "attributes"
            }
            .red(),
            summary.files_with_findings,
            files(summary.files_with_findings),
            summary.files_checked,
            files(summary.files_checked)
        );
    }
}
