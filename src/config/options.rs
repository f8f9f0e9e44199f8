// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use super::consts::*;

/// Scrape stages, in the order a full run executes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Stage {
    PlayerBio,
    TeamRank,
    BestPlayers,
    RoundRobin,
    Schedule,
    /// Per-match player statistics. Needs the schedule, so it also writes it.
    Matches,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::PlayerBio,
        Stage::TeamRank,
        Stage::BestPlayers,
        Stage::RoundRobin,
        Stage::Schedule,
        Stage::Matches,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub out_dir: PathBuf,
    /// Pause after each player row of a match page.
    pub row_pause: Duration,
    /// Parallel match-page fetches. 1 = strictly sequential.
    pub workers: usize,
    pub stages: Vec<Stage>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            row_pause: Duration::from_millis(ROW_PAUSE_MS),
            workers: WORKERS,
            stages: Stage::ALL.to_vec(),
        }
    }
}

impl RunOptions {
    pub fn runs(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }
}
