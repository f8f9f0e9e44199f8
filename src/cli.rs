// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{DEFAULT_OUT_DIR, ROW_PAUSE_MS, WORKERS};
use crate::config::options::{RunOptions, Stage};
use crate::core::net::HttpClient;
use crate::error::Result;
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};

/// Scrape VNL rankings, rosters, leaderboards and match statistics into CSV files.
///
/// With no arguments every stage runs in order and the files land in the
/// current directory.
#[derive(Debug, Parser)]
#[command(name = "vnl_scrape", version, about)]
pub struct Cli {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Pause after each player row of a match page, in milliseconds
    #[arg(long, default_value_t = ROW_PAUSE_MS)]
    pub pause_ms: u64,

    /// Match pages fetched in parallel
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Run only these stages (repeatable). Default: all
    #[arg(long, value_enum)]
    pub only: Vec<Stage>,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        let mut stages = if self.only.is_empty() { Stage::ALL.to_vec() } else { self.only };
        stages.sort();
        stages.dedup();
        RunOptions {
            out_dir: self.out,
            row_pause: Duration::from_millis(self.pause_ms),
            workers: self.workers.max(1),
            stages,
        }
    }
}

pub fn run(cli: Cli) -> Result<RunSummary> {
    let opts = cli.into_options();
    let fetcher = HttpClient::new()?;
    let mut progress = LogProgress::default();

    let summary = runner::run(&fetcher, &opts, Some(&mut progress))?;
    logf!("Done: {} files in {}", summary.files_written.len(), opts.out_dir.display());
    Ok(summary)
}
