use std::process::ExitCode;

use crate::scanner::ScanSummary;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): scan completed, every `<Image>` has `alt`
/// - `Failure` (1): scan completed and found missing `alt` attributes
/// - `Error` (2): scan aborted (unreadable root, IO error, non-UTF-8 file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&ScanSummary> for ExitStatus {
    fn from(summary: &ScanSummary) -> Self {
        if summary.findings > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
