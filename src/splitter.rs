//! Chunked output of an ordered row sequence.
//!
//! Rows are cut into consecutive chunks of at most `chunk_size` rows, in the
//! order given. Chunk `k` (1-based) is written to `{output_base}{k}.csv` with
//! its own header line. When a [`CategoryLabel`] is configured the header gets
//! a trailing `Category` column and every row of chunk `k` gets `label(k)`.

use crate::category::{CATEGORY_COLUMN, CategoryLabel};
use crate::error::Result;
use crate::io::write_csv_lines;
use crate::row::Header;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::info;

/// How to cut and name the split files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOptions {
    pub chunk_size: NonZeroUsize,
    pub output_base: String,
    pub label: Option<CategoryLabel>,
}

impl SplitOptions {
    #[must_use]
    pub fn new(chunk_size: NonZeroUsize, output_base: impl Into<String>) -> Self {
        Self {
            chunk_size,
            output_base: output_base.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: CategoryLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// File name of the 1-based chunk `index`.
    #[must_use]
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{index}.csv", self.output_base)
    }
}

/// Split `[0, len)` into consecutive `[start, end)` ranges of at most `chunk_size`.
///
/// All ranges are full except possibly the last. Empty input yields no ranges.
#[must_use]
pub fn chunk_ranges(len: usize, chunk_size: NonZeroUsize) -> Vec<(usize, usize)> {
    let size = chunk_size.get();
    let mut out = Vec::with_capacity(len.div_ceil(size));
    let mut start = 0usize;
    while start < len {
        let end = (start + size).min(len);
        out.push((start, end));
        start = end;
    }
    out
}

/// Write `rows` as chunk files into `out_dir`.
///
/// Same-named files from an earlier run are overwritten; nothing else in
/// `out_dir` is touched.
///
/// # Returns
/// The paths written, in chunk order. Its length is `ceil(rows / chunk_size)`.
///
/// # Errors
/// Returns [`crate::CsvMergeError::Io`] naming the chunk file that could not be
/// written, or [`crate::CsvMergeError::Config`] when a chunk's category number
/// overflows. The label check runs before the first file is written; chunks
/// written before an I/O failure are left in place.
pub fn split_into_files<S: AsRef<str>>(
    header: &Header,
    rows: &[S],
    options: &SplitOptions,
    out_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let header_line = match options.label {
        Some(_) => header.with_column(CATEGORY_COLUMN),
        None => header.to_string(),
    };

    let ranges = chunk_ranges(rows.len(), options.chunk_size);
    // The last label is the largest; check it before any file is written.
    if let Some(label) = &options.label
        && !ranges.is_empty()
    {
        label.label(ranges.len())?;
    }

    let mut written = Vec::new();
    for (i, (start, end)) in ranges.into_iter().enumerate() {
        let index = i + 1;
        let path = out_dir.join(options.file_name(index));
        let label = options
            .label
            .as_ref()
            .map(|l| l.label(index))
            .transpose()?;
        write_csv_lines(&path, &header_line, &rows[start..end], label.as_deref())?;
        info!(file = %path.display(), rows = end - start, "created split file");
        written.push(path);
    }
    Ok(written)
}

/// Write `rows` as chunk files and return how many were created.
///
/// # Errors
/// See [`split_into_files`].
pub fn split<S: AsRef<str>>(
    header: &Header,
    rows: &[S],
    options: &SplitOptions,
    out_dir: impl AsRef<Path>,
) -> Result<usize> {
    split_into_files(header, rows, options, out_dir).map(|files| files.len())
}
