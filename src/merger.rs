//! Merging and deduplication of CSV inputs.
//!
//! [`Merger::merge`] walks the input files in the order given and builds a
//! [`MergeResult`]:
//!
//! - The first non-empty file supplies the base [`Header`] and the expected
//!   column count. Later headers must agree with it on their leading columns
//!   (see [`Header::check_compatible`]) or the whole merge fails.
//! - Every other line is trimmed; blank lines and lines with fewer fields than
//!   the base header are dropped without being counted.
//! - A row whose trimmed text was already seen, in this file or an earlier
//!   one, increments the duplicate counter. Rows with extra fields are kept.
//! - The unique rows keep first-seen order. A second, uniformly shuffled copy
//!   is produced for the shuffled and split exports.
//!
//! With the `parallel-io` feature the files are read concurrently, but they
//! are always merged in the given order, so the result and the reported error
//! do not depend on thread scheduling. Without it, files are read one at a
//! time as the merge reaches them.

use crate::error::{CsvMergeError, Result};
use crate::io::read_lines;
use crate::row::{Header, field_count, normalize_row};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of one merge. Immutable once built.
#[derive(Clone, Debug, Serialize)]
pub struct MergeResult {
    header: Header,
    unique_rows: Vec<String>,
    shuffled_rows: Vec<String>,
    duplicates_removed: usize,
}

impl MergeResult {
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Unique rows in first-seen order across all files.
    #[must_use]
    pub fn unique_rows(&self) -> &[String] {
        &self.unique_rows
    }

    /// The unique rows in random order.
    #[must_use]
    pub fn shuffled_rows(&self) -> &[String] {
        &self.shuffled_rows
    }

    #[must_use]
    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    #[must_use]
    pub fn final_count(&self) -> usize {
        self.unique_rows.len()
    }
}

/// Reads, validates and deduplicates CSV inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Merger {
    seed: Option<u64>,
}

impl Merger {
    /// A merger that shuffles with OS entropy.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: None }
    }

    /// A merger whose shuffle is reproducible for a given `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Like [`Merger::with_seed`], falling back to OS entropy for `None`.
    #[must_use]
    pub const fn with_optional_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Merge `paths` in order.
    ///
    /// An empty path list, or a list of empty files, yields an empty result
    /// with an empty header.
    ///
    /// # Errors
    /// - [`CsvMergeError::Io`] if a file cannot be read.
    /// - [`CsvMergeError::Validation`] naming the first file whose header does
    ///   not match the base header.
    pub fn merge<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Result<MergeResult> {
        let mut acc = Accumulator::default();
        for (path, lines) in paths.iter().zip(file_lines(paths)) {
            acc.add_file(path.as_ref(), &lines?)?;
        }

        let Accumulator {
            header,
            unique_rows,
            duplicates_removed,
            ..
        } = acc;
        let shuffled_rows = shuffle_rows(&unique_rows, self.seed);
        Ok(MergeResult {
            header: header.unwrap_or_else(|| Header::parse("")),
            unique_rows,
            shuffled_rows,
            duplicates_removed,
        })
    }
}

/// Running state of a merge: the base header plus the seen set and the ordered unique rows.
#[derive(Default)]
struct Accumulator {
    header: Option<Header>,
    expected_cols: usize,
    seen: HashSet<String>,
    unique_rows: Vec<String>,
    duplicates_removed: usize,
}

impl Accumulator {
    fn add_file(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        let Some((first, body)) = lines.split_first() else {
            debug!(file = %path.display(), "skipping empty file");
            return Ok(());
        };

        let current = Header::parse(first);
        match &self.header {
            None => {
                self.expected_cols = current.column_count();
                self.header = Some(current);
            }
            Some(base) => {
                base.check_compatible(&current)
                    .map_err(|m| CsvMergeError::Validation {
                        file: path.to_path_buf(),
                        column: m.column,
                        expected: m.expected,
                        found: m.found,
                    })?;
            }
        }

        let (before_unique, before_dups) = (self.unique_rows.len(), self.duplicates_removed);
        let mut skipped = 0usize;
        for line in body {
            let Some(row) = normalize_row(line) else {
                skipped += 1;
                continue;
            };
            if field_count(row) < self.expected_cols {
                skipped += 1;
                continue;
            }
            if self.seen.contains(row) {
                self.duplicates_removed += 1;
            } else {
                self.seen.insert(row.to_string());
                self.unique_rows.push(row.to_string());
            }
        }

        debug!(
            file = %path.display(),
            added = self.unique_rows.len() - before_unique,
            duplicates = self.duplicates_removed - before_dups,
            skipped,
            "merged file"
        );
        Ok(())
    }
}

/// Lines of every file, in path order.
///
/// Files are read up front on the rayon pool.
#[cfg(feature = "parallel-io")]
fn file_lines<P: AsRef<Path> + Sync>(paths: &[P]) -> impl Iterator<Item = Result<Vec<String>>> {
    use rayon::prelude::*;
    // `collect` on an indexed parallel iterator keeps input order.
    let all: Vec<Result<Vec<String>>> = paths.par_iter().map(|p| read_lines(p)).collect();
    all.into_iter()
}

/// Lines of every file, in path order.
///
/// Each file is read only when the merge reaches it, so one file is held in
/// memory at a time and nothing after a failing file is read.
#[cfg(not(feature = "parallel-io"))]
fn file_lines<P: AsRef<Path> + Sync>(paths: &[P]) -> impl Iterator<Item = Result<Vec<String>>> {
    paths.iter().map(|p| read_lines(p))
}

/// Uniformly shuffled copy of `rows` (Fisher–Yates).
///
/// `Some(seed)` gives a reproducible permutation; `None` seeds from OS entropy.
#[must_use]
pub fn shuffle_rows(rows: &[String], seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut out = rows.to_vec();
    out.shuffle(&mut rng);
    out
}

/// Convenience wrapper: merge `paths` with an optional shuffle seed.
///
/// # Errors
/// See [`Merger::merge`].
pub fn merge_files(paths: &[PathBuf], seed: Option<u64>) -> Result<MergeResult> {
    Merger::with_optional_seed(seed).merge(paths)
}
