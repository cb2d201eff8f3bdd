//! Input fixtures and output readers.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `lines` to `dir/name`, each followed by a newline.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_fixture(dir: impl AsRef<Path>, name: &str, lines: &[&str]) -> Result<PathBuf> {
    let path = dir.as_ref().join(name);
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(&path, text).with_context(|| format!("write fixture {}", path.display()))?;
    Ok(path)
}

/// The two-file example used throughout the docs: one duplicate, three unique rows.
///
/// # Errors
/// Returns an error if either file cannot be written.
pub fn two_file_example(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    Ok(vec![
        write_fixture(dir, "a.csv", &["Name,Age", "Bob,30", "Ann,25", "Bob,30"])?,
        write_fixture(dir, "b.csv", &["Name,Age", "Cid,40"])?,
    ])
}

/// Read an output CSV file into its header line and data rows.
///
/// # Errors
/// Returns an error if the file cannot be read or is empty.
pub fn read_output(path: impl AsRef<Path>) -> Result<(String, Vec<String>)> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut lines = text.lines().map(str::to_string);
    let Some(header) = lines.next() else {
        bail!("{} has no header line", path.display());
    };
    Ok((header, lines.collect()))
}

/// Split a labelled row into the original row and its trailing label.
#[must_use]
pub fn split_label(row: &str) -> (&str, &str) {
    row.rsplit_once(',').unwrap_or((row, ""))
}

/// Sorted file names directly inside `dir`.
///
/// # Errors
/// Returns an error if the directory cannot be listed.
pub fn file_names(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
