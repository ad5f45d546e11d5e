//! Finding sinks.
//!
//! Findings are handed to a [`Report`] the moment they are found. The library
//! never prints on its own; the binary decides where the sink writes.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::finding::Finding;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two human-readable lines per finding
    #[default]
    Text,
    /// One JSON object per finding per line
    Json,
}

pub trait Report {
    fn emit(&mut self, finding: &Finding) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Plain text report:
///
/// ```text
/// Missing alt in src/app.tsx at line 3
/// Tag: <Image src="a.png" />
/// ```
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for TextReport<W> {
    fn emit(&mut self, finding: &Finding) -> Result<()> {
        writeln!(self.out, "{finding}").context("Failed to write finding")
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }
}

/// JSON Lines report, one `{"file", "line", "tag"}` object per finding.
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for JsonReport<W> {
    fn emit(&mut self, finding: &Finding) -> Result<()> {
        serde_json::to_writer(&mut self.out, finding).context("Failed to serialize finding")?;
        writeln!(self.out).context("Failed to write finding")
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }
}

/// Build the report for `format` on top of `out`.
pub fn reporter<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Report + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextReport::new(out)),
        OutputFormat::Json => Box::new(JsonReport::new(out)),
    }
}

/// Collects findings in memory. Used by tests and library callers that want
/// the findings as values instead of output.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub findings: Vec<Finding>,
}

impl Report for CollectReport {
    fn emit(&mut self, finding: &Finding) -> Result<()> {
        self.findings.push(finding.clone());
        Ok(())
    }
}
