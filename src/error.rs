//! Error type shared by every stage of a merge run.
//!
//! Malformed rows are not errors: they are skipped by the merger and never
//! counted. Everything here is fatal for the current run.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T, E = CsvMergeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CsvMergeError {
    /// A file's header does not match the base header over the shared leading columns.
    #[error(
        "CSV headers do not match in file: {} (column {column}: expected `{expected}`, found `{found}`)",
        file.display()
    )]
    Validation {
        file: PathBuf,
        /// 1-based column index of the first mismatch.
        column: usize,
        expected: String,
        found: String,
    },

    /// Invalid caller-supplied configuration; raised before any file is scanned.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid input pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },
}

impl CsvMergeError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Build a closure for `map_err` that tags an I/O failure with its action and path.
    pub fn io<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> Self + 'a {
        move |source| Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Validation { file, .. } => Some(file),
            Self::Io { path, .. } => Some(path),
            Self::Config(_) | Self::Pattern { .. } => None,
        }
    }
}
