//! Row and header model.
//!
//! Rows are kept as raw line text. Fields are never parsed individually: the
//! only per-field operations are counting them and reading the first one as a
//! sort key. Splitting is naive (no quoting) and keeps empty trailing fields,
//! so `"a,b,"` has three fields.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Number of leading header columns compared between input files.
pub const HEADER_CHECK_COLUMNS: usize = 5;

const BOM: char = '\u{FEFF}';

/// Number of comma-separated fields in `line`, trailing empty fields included.
#[inline]
#[must_use]
pub fn field_count(line: &str) -> usize {
    line.split(',').count()
}

/// First comma-delimited field of `line` (the whole line if it has no comma).
#[inline]
#[must_use]
pub fn first_field(line: &str) -> &str {
    line.split(',').next().unwrap_or(line)
}

/// Normalize a raw line into row text, or `None` when it is blank.
#[must_use]
pub fn normalize_row(line: &str) -> Option<&str> {
    let row = line.trim();
    (!row.is_empty()).then_some(row)
}

/// Case-insensitive ordering on the first field of two rows.
#[must_use]
pub fn cmp_first_field(a: &str, b: &str) -> Ordering {
    first_field(a)
        .to_lowercase()
        .cmp(&first_field(b).to_lowercase())
}

/// The header line of a CSV file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Header(String);

/// First differing column between two headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderMismatch {
    /// 1-based column index.
    pub column: usize,
    pub expected: String,
    pub found: String,
}

impl Header {
    /// Parse a header from the first line of a file: every BOM is removed and
    /// surrounding whitespace trimmed.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        Self(line.replace(BOM, "").trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        field_count(&self.0)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.split(',')
    }

    /// Header line with an extra trailing column appended.
    #[must_use]
    pub fn with_column(&self, name: &str) -> String {
        format!("{},{name}", self.0)
    }

    /// Compare the leading columns of `other` against this (base) header.
    ///
    /// Only the first `min(5, self.columns, other.columns)` columns are looked
    /// at; each pair is compared trimmed and case-insensitively.
    ///
    /// # Errors
    /// Returns the first mismatching column.
    pub fn check_compatible(&self, other: &Self) -> Result<(), HeaderMismatch> {
        let shared = HEADER_CHECK_COLUMNS
            .min(self.column_count())
            .min(other.column_count());
        for (i, (base, cur)) in self.columns().zip(other.columns()).take(shared).enumerate() {
            let (base, cur) = (base.trim(), cur.trim());
            if base.to_lowercase() != cur.to_lowercase() {
                return Err(HeaderMismatch {
                    column: i + 1,
                    expected: base.to_string(),
                    found: cur.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Header {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
