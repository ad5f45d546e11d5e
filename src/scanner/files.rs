use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{IntoIter, WalkDir};

use crate::config::SCANNABLE_EXTENSIONS;

/// Lazy, depth-first walk over every candidate file under a root.
///
/// Directories are always descended. Only regular files whose name ends with
/// one of [`SCANNABLE_EXTENSIONS`] are yielded. A symlink to a file counts as
/// a file; symlinked directories are not descended.
pub struct CandidateFiles {
    walker: IntoIter,
}

impl Iterator for CandidateFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    return Some(Err(err).with_context(|| format!("Cannot access path: {path}")));
                }
            };

            if entry.path().is_file() && is_scannable_file(entry.path()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Start walking `root`.
///
/// The root is checked up front so a missing or unreadable root fails here
/// rather than on the first call to `next`. Calling this again with the same
/// root restarts the walk from the beginning.
pub fn traverse(root: &Path) -> Result<CandidateFiles> {
    std::fs::metadata(root)
        .with_context(|| format!("Cannot read scan root: {}", root.display()))?;

    Ok(CandidateFiles {
        walker: WalkDir::new(root).into_iter(),
    })
}

pub(crate) fn is_scannable_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.as_encoded_bytes();
        SCANNABLE_EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(ext.as_bytes()))
    })
}
