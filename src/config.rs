//! Run configuration.
//!
//! A [`MergeConfig`] can be built in code, deserialized from a JSON file, or
//! assembled by the command line front end. [`MergeConfig::validate`] turns it
//! into a [`RunPlan`] and must succeed before any directory is scanned.

use crate::category::CategoryLabel;
use crate::error::{CsvMergeError, Result};
use crate::splitter::SplitOptions;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "Input Folder";
pub const DEFAULT_OUTPUT_DIR: &str = "Output Folder";
pub const DEFAULT_CHUNK_SIZE: u64 = 500;
pub const DEFAULT_OUTPUT_BASE: &str = "ShuffledCSV";
pub const DEFAULT_LOG_DIR: &str = "Logs";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Maximum rows per split file; must be positive.
    pub chunk_size: u64,
    /// Letters optionally followed by digits, e.g. `"Batch7"`. Blank disables labelling.
    pub category_base: Option<String>,
    pub output_base: String,
    /// Fixed shuffle seed; OS entropy when absent.
    pub seed: Option<u64>,
    /// Directory receiving a per-run log file; `None` logs to the console only.
    pub log_dir: Option<PathBuf>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chunk_size: DEFAULT_CHUNK_SIZE,
            category_base: None,
            output_base: DEFAULT_OUTPUT_BASE.to_string(),
            seed: None,
            log_dir: Some(PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }
}

/// A validated configuration, ready to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunPlan {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub split: SplitOptions,
    pub seed: Option<u64>,
}

impl MergeConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`CsvMergeError::Io`] if the file cannot be read and
    /// [`CsvMergeError::Config`] if it is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(CsvMergeError::io("read", path))?;
        serde_json::from_str(&text)
            .map_err(|e| CsvMergeError::config(format!("{}: {e}", path.display())))
    }

    /// Check every field and build the [`RunPlan`].
    ///
    /// Text fields are trimmed. A blank category base disables labelling and
    /// blank directories fall back to their defaults.
    ///
    /// # Errors
    /// Returns [`CsvMergeError::Config`] for a zero chunk size, a blank output
    /// base name, or a category base whose number does not fit in a `u64`.
    pub fn validate(&self) -> Result<RunPlan> {
        let chunk_size = usize::try_from(self.chunk_size)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| CsvMergeError::config("Invalid number for entries per file."))?;

        let output_base = self.output_base.trim();
        if output_base.is_empty() {
            return Err(CsvMergeError::config("Output base filename cannot be empty."));
        }

        let label = match self.category_base.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => Some(CategoryLabel::parse(base)?),
            _ => None,
        };

        let mut split = SplitOptions::new(chunk_size, output_base);
        split.label = label;
        Ok(RunPlan {
            input_dir: dir_or_default(&self.input_dir, DEFAULT_INPUT_DIR),
            output_dir: dir_or_default(&self.output_dir, DEFAULT_OUTPUT_DIR),
            split,
            seed: self.seed,
        })
    }
}

/// Parse a user-entered chunk size.
///
/// # Errors
/// Returns [`CsvMergeError::Config`] unless `text` is a positive integer.
pub fn parse_chunk_size(text: &str) -> Result<u64> {
    match text.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CsvMergeError::config("Invalid number for entries per file.")),
    }
}

fn dir_or_default(dir: &Path, default: &str) -> PathBuf {
    if dir.as_os_str().is_empty() {
        PathBuf::from(default)
    } else {
        dir.to_path_buf()
    }
}

/// Name of the log file for a run started at `at`, e.g. `CSVMergeLog_2025-07-31_14-05-09.txt`.
#[must_use]
pub fn log_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("CSVMergeLog_{}.txt", at.format("%Y-%m-%d_%H-%M-%S"))
}
