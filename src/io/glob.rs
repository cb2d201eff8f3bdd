//! Discovery of input CSV files.
//!
//! Input files are matched with a `*.csv` glob inside the input directory and
//! returned sorted lexicographically, which fixes the merge order (and so the
//! first-seen order of rows and which file a header error is reported for).

use crate::error::{CsvMergeError, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Expand a glob pattern into a sorted vector of matching file paths.
///
/// Directories matching the pattern are ignored.
///
/// # Errors
/// Returns [`CsvMergeError::Pattern`] for an invalid pattern and
/// [`CsvMergeError::Io`] when a matched entry cannot be read. No matches is
/// not an error.
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob(pattern).map_err(|e| CsvMergeError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut result = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            CsvMergeError::io("read directory entry", &path)(e.into())
        })?;
        if path.is_file() {
            result.push(path);
        }
    }

    result.sort();
    Ok(result)
}

/// All `*.csv` files directly inside `dir`, sorted by path.
///
/// # Errors
/// See [`expand_glob`].
pub fn list_csv_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    // Escape the directory so brackets or stars in its name are taken literally.
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.csv");
    expand_glob(&pattern.to_string_lossy())
}
