//! Testing utilities for merge runs.
//!
//! - **Fixtures**: write input CSV files and read output files back
//! - **Assertions**: compare row collections produced by a run
//! - **Progress recording**: capture the milestones a run reports
//!
//! # Quick Start
//!
//! ```no_run
//! use csvmerge::testing::*;
//! use csvmerge::{MergeConfig, run};
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = tempfile::tempdir()?;
//! let input = dir.path().join("in");
//! std::fs::create_dir_all(&input)?;
//! write_fixture(&input, "a.csv", &["Name,Age", "Bob,30", "Bob,30"])?;
//!
//! let config = MergeConfig {
//!     input_dir: input,
//!     output_dir: dir.path().join("out"),
//!     chunk_size: 10,
//!     seed: Some(7),
//!     ..MergeConfig::default()
//! };
//! let mut progress = RecordingProgress::default();
//! let summary = run(&config, &mut progress)?;
//! assert_eq!(summary.duplicates_removed, 1);
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

use crate::progress::{ProgressSink, Stage};

/// A [`ProgressSink`] that remembers every milestone it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingProgress {
    pub stages: Vec<Stage>,
}

impl ProgressSink for RecordingProgress {
    fn milestone(&mut self, stage: Stage) {
        self.stages.push(stage);
    }
}
