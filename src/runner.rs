// src/runner.rs
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    mpsc,
};
use std::thread;

use crate::{
    config::consts::*,
    config::options::{RunOptions, Stage},
    core::net::Fetch,
    error::{Result, ScrapeError},
    file::{ensure_directory, write_dataset},
    progress::Progress,
    specs::{best_players, match_detail, players, round_robin, schedule, team_rank},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Run the selected stages in their fixed order. The first failure aborts;
/// files of stages already finished stay on disk.
pub fn run(
    fetcher: &dyn Fetch,
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    ensure_directory(&opts.out_dir)?;
    let dir = opts.out_dir.as_path();
    let mut written = Vec::new();

    if opts.runs(Stage::PlayerBio) {
        note(&mut progress, "Fetching rosters…");
        let bio = players::collect(fetcher, progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
        written.push(write_dataset(dir, PLAYER_BIO_FILE, &bio)?);
    }

    if opts.runs(Stage::TeamRank) {
        note(&mut progress, "Fetching team ranking…");
        let rank = team_rank::fetch(fetcher)?;
        written.push(write_dataset(dir, TEAM_RANK_FILE, &rank)?);
    }

    if opts.runs(Stage::BestPlayers) {
        note(&mut progress, "Fetching leaderboards…");
        for (name, board) in best_players::fetch(fetcher)? {
            written.push(write_dataset(dir, &join!(name, ".csv"), &board)?);
        }
    }

    if opts.runs(Stage::RoundRobin) {
        note(&mut progress, "Fetching round-robin results…");
        let rr = round_robin::fetch(fetcher)?;
        written.push(write_dataset(dir, ROUND_ROBIN_FILE, &rr)?);
    }

    if opts.runs(Stage::Schedule) || opts.runs(Stage::Matches) {
        note(&mut progress, "Fetching 2021 schedule…");
        let matches = schedule::fetch(fetcher)?;
        written.push(write_dataset(dir, SCHEDULE_FILE, &schedule::to_dataset(&matches))?);

        if opts.runs(Stage::Matches) {
            let ids = schedule::match_ids(&matches);
            note(&mut progress, &format!("Fetching {} match pages…", ids.len()));
            let stats = collect_matches(
                fetcher,
                &ids,
                opts,
                progress.as_deref_mut().map(|p| p as &mut dyn Progress),
            )?;
            written.push(write_dataset(dir, MATCHES_FILE, &match_detail::to_dataset(&stats))?);
        }
    }

    Ok(RunSummary { files_written: written })
}

fn note(progress: &mut Option<&mut dyn Progress>, msg: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
    }
}

/// Player lines of every match, in `ids` order.
///
/// `opts.workers` threads pull indices off a shared counter; results come
/// back over a channel and are slotted by index, so the output matches a
/// sequential run. After the first failure no new match is started, and the
/// error of the lowest failing index is returned.
pub fn collect_matches(
    fetcher: &dyn Fetch,
    ids: &[String],
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<match_detail::PlayerMatchStat>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let workers = opts.workers.min(ids.len()).max(1);
    let next = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let mut slots: Vec<Option<Result<Vec<match_detail::PlayerMatchStat>>>> =
        (0..ids.len()).map(|_| None).collect();

    thread::scope(|scope| {
        let (res_tx, res_rx) = mpsc::channel();

        for _ in 0..workers {
            let tx = res_tx.clone();
            let (next, stop) = (&next, &stop);
            scope.spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= ids.len() {
                        break;
                    }
                    let result = match_detail::fetch(fetcher, &ids[i], opts.row_pause);
                    if result.is_err() {
                        stop.store(true, Ordering::Relaxed);
                    }
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for (i, result) in res_rx {
            match &result {
                Ok(_) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, &ids[i]);
                    }
                }
                Err(e) => loge!("Match {}: {e}", ids[i]),
            }
            slots[i] = Some(result);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let mut stats = Vec::new();
    for (i, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(Ok(rows)) => stats.extend(rows),
            Some(Err(e)) => return Err(e),
            None => {
                return Err(ScrapeError::structure(format!("match {} was never fetched", ids[i])));
            }
        }
    }
    Ok(stats)
}
