//! CLI binary for csvmerge.

use anyhow::{Context, Result};
use clap::Parser;
use csvmerge::config::log_file_name;
use csvmerge::{LogProgress, MergeConfig, Runner, parse_chunk_size};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// CSV Merger - merges, deduplicates, shuffles and splits CSV files.
#[derive(Parser, Debug)]
#[command(name = "csvmerge", version)]
#[command(about = "Merge, clean and shuffle two or more CSV files")]
struct Args {
    /// JSON configuration file; command line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory scanned for *.csv inputs (default: "Input Folder")
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving all outputs (default: "Output Folder")
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Maximum entries per split CSV (default: 500)
    #[arg(long)]
    chunk_size: Option<String>,

    /// Category base such as "Batch7"; enables the Category column
    #[arg(long)]
    category: Option<String>,

    /// Base filename of the split files (default: "ShuffledCSV")
    #[arg(long)]
    output_base: Option<String>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the timestamped run log file (default: "Logs")
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log to the console only
    #[arg(long, conflicts_with = "log_dir")]
    no_log_file: bool,

    /// Write the run summary as JSON to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _guard = match init_tracing(config.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &MergeConfig) -> Result<()> {
    let runner = Runner::from_config(config)?;

    info!(
        input = %runner.plan.input_dir.display(),
        output = %runner.plan.output_dir.display(),
        chunk_size = runner.plan.split.chunk_size.get(),
        "Starting CSV merge"
    );

    let summary = runner.run(&mut LogProgress)?;
    summary.print();

    if let Some(path) = &args.summary_json {
        summary
            .save_to_file(path)
            .with_context(|| format!("save summary to {}", path.display()))?;
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<MergeConfig> {
    let mut config = match &args.config {
        Some(path) => MergeConfig::from_json_file(path)
            .with_context(|| format!("load configuration {}", path.display()))?,
        None => MergeConfig::default(),
    };

    if let Some(dir) = &args.input_dir {
        config.input_dir.clone_from(dir);
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir.clone_from(dir);
    }
    if let Some(size) = &args.chunk_size {
        config.chunk_size = parse_chunk_size(size)?;
    }
    if let Some(category) = &args.category {
        config.category_base = Some(category.clone());
    }
    if let Some(base) = &args.output_base {
        config.output_base.clone_from(base);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(dir) = &args.log_dir {
        config.log_dir = Some(dir.clone());
    }
    if args.no_log_file {
        config.log_dir = None;
    }
    Ok(config)
}

fn init_tracing(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log directory {}", dir.display()))?;
            let name = log_file_name(&chrono::Local::now());
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name)
                .build(dir)
                .with_context(|| format!("create log file in {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;
    Ok(guard)
}
