//! Reading source text off disk. A corpus is just one big string; the chain only ever sees that.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Reads every file in `root/category` into one corpus.
///
/// Each file is preceded by a newline, so the last word of one file and the first word of the
/// next stay separate tokens. Files are read in file name order; subdirectories are skipped.
pub fn read_category(root: &Path, category: &str) -> Result<String> {
    read_dir(&root.join(category))
}

/// Reads every file directly inside `dir` into one corpus. See [`read_category()`].
pub fn read_dir(dir: &Path) -> Result<String> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut text = String::new();
    for path in &paths {
        text.push('\n');
        text.push_str(&fs::read_to_string(path).map_err(|e| Error::io(path, e))?);
    }

    debug!(dir = %dir.display(), files = paths.len(), bytes = text.len(), "read corpus");
    Ok(text)
}

/// Reads a single file as a corpus.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
