//! Coarse progress reporting.
//!
//! A run reports a handful of milestones to a [`ProgressSink`]; front ends
//! decide how to show them (log lines, a progress bar, nothing at all).

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Milestones of a run, in the order they are reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Looking for input files.
    Scanning,
    /// Inputs merged and deduplicated.
    Merged,
    /// Sorted and shuffled full exports written.
    FullExports,
    /// Split files written; the run is complete.
    Finished,
}

impl Stage {
    /// Completion percentage reported with this milestone.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Scanning => 0,
            Self::Merged => 25,
            Self::FullExports => 60,
            Self::Finished => 100,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Scanning => "scanning",
            Self::Merged => "merged",
            Self::FullExports => "full exports",
            Self::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// Receiver of progress milestones.
pub trait ProgressSink {
    fn milestone(&mut self, stage: Stage);
}

/// Reports milestones as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn milestone(&mut self, stage: Stage) {
        info!(stage = %stage, percent = stage.percent(), "progress");
    }
}

/// Ignores all milestones.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn milestone(&mut self, _stage: Stage) {}
}
