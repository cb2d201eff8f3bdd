//! Run summary: what a run produced, for logging and machine-readable reports.

use crate::error::{CsvMergeError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Input CSV files found in the input directory.
    pub files_scanned: usize,
    /// Unique rows after deduplication.
    pub total_entries: usize,
    pub duplicates_removed: usize,
    pub split_files_created: usize,
    /// Every file written, in the order it was written.
    pub outputs: Vec<PathBuf>,
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    }

    /// Emit the summary as `tracing` events.
    pub fn log(&self) {
        info!("Summary:");
        info!("Total entries: {}", self.total_entries);
        info!("Duplicates removed: {}", self.duplicates_removed);
        info!("Output CSV files created: {}", self.split_files_created);
    }

    /// Print the summary to stdout in a human-readable format.
    pub fn print(&self) {
        println!("\n=============== Summary ===============");
        println!("Input files scanned: {}", self.files_scanned);
        println!("Total entries: {}", self.total_entries);
        println!("Duplicates removed: {}", self.duplicates_removed);
        println!("Output CSV files created: {}", self.split_files_created);
        println!(
            "Execution Time: {:.3}s ({} ms)",
            Duration::from_millis(self.elapsed_ms).as_secs_f64(),
            self.elapsed_ms
        );
        println!("=======================================\n");
    }

    /// Save the summary as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`CsvMergeError::Io`] if the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(CsvMergeError::io("create", path))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, self)
            .map_err(std::io::Error::from)
            .and_then(|()| w.flush())
            .map_err(CsvMergeError::io("write", path))
    }
}
