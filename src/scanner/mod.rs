//! Single-pass scanner: walk the tree, match `<Image>` elements, report the
//! ones without `alt`.
//!
//! Everything runs sequentially. The first IO or decode error aborts the scan;
//! findings already handed to the report stay emitted.

mod files;
mod matcher;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{finding::Finding, report::Report};

pub use files::{CandidateFiles, traverse};
pub use matcher::{TagOccurrence, find_image_tags, has_alt_attribute, line_number};

/// Totals for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_checked: usize,
    pub files_with_findings: usize,
    pub findings: usize,
}

/// Read `path` as UTF-8 and report every image element lacking `alt`.
///
/// `\r\n` and lone `\r` line endings are read as `\n` before matching, so
/// tag text and line numbers do not depend on the file's line endings.
///
/// Returns the number of findings emitted for this file.
pub fn check_file(path: &Path, report: &mut dyn Report) -> Result<usize> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let content = String::from_utf8(bytes)
        .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;
    let content = normalize_line_endings(content);

    let file_path = path.display().to_string();
    let mut count = 0;

    for tag in find_image_tags(&content) {
        if tag.has_alt_attribute() {
            continue;
        }
        let finding = Finding::new(
            file_path.as_str(),
            line_number(&content, tag.offset),
            tag.tag_text(),
        );
        report.emit(&finding)?;
        count += 1;
    }

    Ok(count)
}

fn normalize_line_endings(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

/// Check every candidate file under `root`, in traversal order.
pub fn scan_directory(root: &Path, report: &mut dyn Report, verbose: bool) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for path in traverse(root)? {
        let path = path?;
        if verbose {
            eprintln!("{} {}", "checking".dimmed(), path.display());
        }

        let count = check_file(&path, report)?;
        summary.files_checked += 1;
        if count > 0 {
            summary.files_with_findings += 1;
            summary.findings += count;
        }
    }

    report.finish()?;
    Ok(summary)
}
