use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::report::OutputFormat;

/// File name suffixes that make a file a scan candidate.
pub const SCANNABLE_EXTENSIONS: &[&str] = &[".tsx", ".js", ".jsx"];

/// Environment variable read when no root is given on the command line.
pub const ROOT_ENV_VAR: &str = "ALTSCAN_ROOT";

/// Resolved settings for one scan.
///
/// The recognized extensions and the checked attribute are fixed; the root
/// is the only thing that changes what gets scanned.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: OutputFormat::default(),
            verbose: false,
        }
    }

    /// Reject a root that is missing or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            bail!("Scan root does not exist: {}", self.root.display());
        }
        if !self.root.is_dir() {
            bail!("Scan root is not a directory: {}", self.root.display());
        }
        Ok(())
    }
}
