use std::fmt;

use serde::Serialize;

/// An `<Image>` element without an `alt` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(rename = "file")]
    pub file_path: String,
    /// 1-based.
    pub line: usize,
    /// The element as `<Image {props}>`.
    pub tag: String,
}

impl Finding {
    pub fn new(file_path: impl Into<String>, line: usize, tag: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            tag: tag.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Missing alt in {} at line {}", self.file_path, self.line)?;
        write!(f, "Tag: {}", self.tag)
    }
}
