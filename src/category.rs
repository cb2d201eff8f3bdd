//! Per-chunk category labels.
//!
//! A base such as `"Batch07"` is split into the prefix `"Batch"` and the start
//! number `7`; chunk `k` (1-based) is then labelled `Batch{7 + k - 1}`. A base
//! without trailing digits starts at 1 and keeps the whole string as prefix.
//! Leading zeros of the suffix are not preserved (`"A007"` labels `A7`, `A8`, ...).

use crate::error::{CsvMergeError, Result};
use serde::{Deserialize, Serialize};

/// Name of the column appended to split files when labelling is on.
pub const CATEGORY_COLUMN: &str = "Category";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub prefix: String,
    pub start: u64,
}

impl CategoryLabel {
    /// Split `base` into its non-numeric prefix and trailing number.
    ///
    /// # Errors
    /// Returns [`CsvMergeError::Config`] when the trailing number does not fit in a `u64`.
    pub fn parse(base: &str) -> Result<Self> {
        let prefix = base.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = &base[prefix.len()..];
        if digits.is_empty() {
            return Ok(Self {
                prefix: base.to_string(),
                start: 1,
            });
        }
        let start = digits.parse::<u64>().map_err(|_| {
            CsvMergeError::config(format!(
                "category base `{base}` has a numeric suffix that is too large"
            ))
        })?;
        Ok(Self {
            prefix: prefix.to_string(),
            start,
        })
    }

    /// Label for the 1-based chunk `index`.
    ///
    /// # Errors
    /// Returns [`CsvMergeError::Config`] when `start + index - 1` does not fit in a `u64`.
    pub fn label(&self, index: usize) -> Result<String> {
        let n = u64::try_from(index.saturating_sub(1))
            .ok()
            .and_then(|offset| self.start.checked_add(offset))
            .ok_or_else(|| {
                CsvMergeError::config(format!(
                    "category number for chunk {index} overflows (prefix `{}`, start {})",
                    self.prefix, self.start
                ))
            })?;
        Ok(format!("{}{n}", self.prefix))
    }
}
