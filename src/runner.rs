use crate::config::{MergeConfig, RunPlan};
use crate::error::Result;
use crate::export::{write_shuffled_export, write_sorted_export};
use crate::io::{ensure_dir, list_csv_files};
use crate::merger::{MergeResult, Merger};
use crate::progress::{ProgressSink, Stage};
use crate::splitter::split_into_files;
use crate::summary::RunSummary;
use std::time::Instant;
use tracing::{info, warn};

/// Executes one merge run for a validated [`RunPlan`].
///
/// The stages always run in this order:
/// 1. merge every `*.csv` of the input directory (sorted by path),
/// 2. write `0_FULL_UNSHUFFLED.csv`, then `1_FULL_SHUFFLED.csv`,
/// 3. split the shuffled rows into `{output_base}{k}.csv` files.
///
/// Configuration and header errors stop the run before anything is written.
/// An I/O error aborts the remaining stages but files already written by
/// earlier stages are left in the output directory.
#[derive(Clone, Debug)]
pub struct Runner {
    pub plan: RunPlan,
}

impl Runner {
    #[must_use]
    pub const fn new(plan: RunPlan) -> Self {
        Self { plan }
    }

    /// Validate `config` and build a runner for it.
    ///
    /// # Errors
    /// Returns [`crate::CsvMergeError::Config`]; see [`MergeConfig::validate`].
    pub fn from_config(config: &MergeConfig) -> Result<Self> {
        config.validate().map(Self::new)
    }

    /// Run all stages, reporting milestones to `progress`.
    ///
    /// Missing input and output directories are created. An input directory
    /// without CSV files ends the run early with an empty summary.
    ///
    /// # Errors
    /// Any [`crate::CsvMergeError`] raised by a stage; see the type docs for
    /// what is left on disk.
    pub fn run(&self, progress: &mut dyn ProgressSink) -> Result<RunSummary> {
        let started = Instant::now();
        let plan = &self.plan;
        let mut summary = RunSummary::default();

        ensure_dir(&plan.input_dir)?;
        ensure_dir(&plan.output_dir)?;

        progress.milestone(Stage::Scanning);
        info!(dir = %plan.input_dir.display(), "Scanning input directory...");
        let inputs = list_csv_files(&plan.input_dir)?;
        summary.files_scanned = inputs.len();
        if inputs.is_empty() {
            warn!(dir = %plan.input_dir.display(), "No CSV files found in input directory.");
            summary.set_elapsed(started.elapsed());
            return Ok(summary);
        }

        info!("Found {} CSV files. Starting merge...", inputs.len());
        let result = Merger::with_optional_seed(plan.seed).merge(&inputs)?;
        summary.total_entries = result.final_count();
        summary.duplicates_removed = result.duplicates_removed();
        progress.milestone(Stage::Merged);

        self.write_outputs(&result, &mut summary, progress)?;

        summary.set_elapsed(started.elapsed());
        summary.log();
        info!("All tasks completed successfully!");
        Ok(summary)
    }

    fn write_outputs(
        &self,
        result: &MergeResult,
        summary: &mut RunSummary,
        progress: &mut dyn ProgressSink,
    ) -> Result<()> {
        let out_dir = &self.plan.output_dir;

        info!("Creating full CSV outputs...");
        summary.outputs.push(write_sorted_export(result, out_dir)?);
        summary.outputs.push(write_shuffled_export(result, out_dir)?);
        progress.milestone(Stage::FullExports);

        info!("Splitting into smaller CSV files...");
        let chunks = split_into_files(
            result.header(),
            result.shuffled_rows(),
            &self.plan.split,
            out_dir,
        )?;
        summary.split_files_created = chunks.len();
        summary.outputs.extend(chunks);
        progress.milestone(Stage::Finished);
        Ok(())
    }
}

/// Validate `config` and run it.
///
/// # Errors
/// See [`Runner::run`].
pub fn run(config: &MergeConfig, progress: &mut dyn ProgressSink) -> Result<RunSummary> {
    Runner::from_config(config)?.run(progress)
}
