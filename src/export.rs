//! Full (unchunked) exports of a merge.

use crate::error::Result;
use crate::io::write_csv_lines;
use crate::merger::MergeResult;
use crate::row::cmp_first_field;
use std::path::{Path, PathBuf};
use tracing::info;

/// All unique rows, sorted by first field.
pub const SORTED_EXPORT: &str = "0_FULL_UNSHUFFLED.csv";
/// All unique rows, shuffled.
pub const SHUFFLED_EXPORT: &str = "1_FULL_SHUFFLED.csv";

/// Stable sort of `rows` by case-insensitive first field.
///
/// Rows sharing a first field keep their relative order, so sorting an
/// already sorted slice is a no-op.
pub fn sort_by_first_field<S: AsRef<str>>(rows: &mut [S]) {
    rows.sort_by(|a, b| cmp_first_field(a.as_ref(), b.as_ref()));
}

/// Sorted copy of `rows`; see [`sort_by_first_field`].
#[must_use]
pub fn sorted_by_first_field(rows: &[String]) -> Vec<String> {
    let mut out = rows.to_vec();
    sort_by_first_field(&mut out);
    out
}

/// Write [`SORTED_EXPORT`] into `out_dir`.
///
/// # Errors
/// Returns [`crate::CsvMergeError::Io`] if the file cannot be written.
pub fn write_sorted_export(result: &MergeResult, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = out_dir.as_ref().join(SORTED_EXPORT);
    let rows = sorted_by_first_field(result.unique_rows());
    write_csv_lines(&path, result.header().as_str(), &rows, None)?;
    info!(file = %path.display(), rows = rows.len(), "created {SORTED_EXPORT}");
    Ok(path)
}

/// Write [`SHUFFLED_EXPORT`] into `out_dir`.
///
/// # Errors
/// Returns [`crate::CsvMergeError::Io`] if the file cannot be written.
pub fn write_shuffled_export(result: &MergeResult, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = out_dir.as_ref().join(SHUFFLED_EXPORT);
    let rows = result.shuffled_rows();
    write_csv_lines(&path, result.header().as_str(), rows, None)?;
    info!(file = %path.display(), rows = rows.len(), "created {SHUFFLED_EXPORT}");
    Ok(path)
}
