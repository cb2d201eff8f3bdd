//! # csvmerge
//!
//! Merge a directory of CSV files that share a header, drop exact-duplicate
//! rows, shuffle them and split the result into fixed-size files with an
//! optional per-file category label.
//!
//! ## Key Features
//!
//! - **Header checks** - the first five columns of every input must match the
//!   first file's header (trimmed, case-insensitive)
//! - **Exact deduplication** - rows are compared as trimmed text; the first
//!   occurrence wins and later ones are counted as duplicates
//! - **Full exports** - `0_FULL_UNSHUFFLED.csv` sorted by first field and
//!   `1_FULL_SHUFFLED.csv` in uniform random order
//! - **Splitting** - the shuffled rows cut into `{base}{k}.csv` chunks,
//!   optionally tagged with a `Category` column (`A7`, `A8`, ...)
//! - **Reproducible shuffles** - inject a seed, or use OS entropy
//!
//! ## Quick Start
//!
//! ```no_run
//! use csvmerge::{LogProgress, MergeConfig, run};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = MergeConfig {
//!     chunk_size: 250,
//!     category_base: Some("Batch1".into()),
//!     ..MergeConfig::default()
//! };
//! let summary = run(&config, &mut LogProgress)?;
//! println!("{} unique rows in {} files", summary.total_entries, summary.split_files_created);
//! # Ok(())
//! # }
//! ```
//!
//! ## CSV format
//!
//! Lines are split naively on commas: there is no quoting or escaping, and
//! empty trailing fields count. A byte-order mark is stripped from header
//! lines only. Rows with fewer fields than the header are skipped; rows with
//! more are kept as they are.
//!
//! ## Building blocks
//!
//! The stages can be used on their own:
//! - [`Merger`] / [`MergeResult`] - read, validate and deduplicate inputs
//! - [`export`] - the two full exports and the first-field sort
//! - [`splitter`] - chunked output with [`CategoryLabel`]s
//! - [`Runner`] - all of the above in order, with [`ProgressSink`] milestones

pub mod category;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod merger;
pub mod progress;
pub mod row;
pub mod runner;
pub mod splitter;
pub mod summary;
pub mod testing;

pub use category::CategoryLabel;
pub use config::{MergeConfig, RunPlan, parse_chunk_size};
pub use error::{CsvMergeError, Result};
pub use export::{SHUFFLED_EXPORT, SORTED_EXPORT, sort_by_first_field};
pub use merger::{MergeResult, Merger, merge_files, shuffle_rows};
pub use progress::{LogProgress, NoProgress, ProgressSink, Stage};
pub use row::Header;
pub use runner::{Runner, run};
pub use splitter::{SplitOptions, chunk_ranges, split, split_into_files};
pub use summary::RunSummary;
