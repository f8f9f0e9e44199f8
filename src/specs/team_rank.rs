// src/specs/team_rank.rs

use crate::config::consts::ROUND1_URL;
use crate::config::teams::abbr_for;
use crate::core::net::Fetch;
use crate::engine::{fetch_table, TableSpec};
use crate::error::{Result, ScrapeError};
use crate::store::{Cell, DataSet};

const LEADING: [&str; 5] = ["rank", "team_full", "match_total", "match_win", "match_lose"];

/// Ranking table on the round-1 page: second header row, three unlabeled
/// leading columns.
pub fn table_spec() -> TableSpec {
    TableSpec::nth(0).th_row(1).prefix_col(3)
}

pub fn fetch(fetcher: &dyn Fetch) -> Result<DataSet> {
    shape(fetch_table(fetcher, ROUND1_URL, &table_spec())?)
}

/// Drop the flag column, resolve duplicate-name counters into `set_`/`point_`
/// prefixes, apply the fixed renames and append the team abbreviation.
pub fn shape(mut ds: DataSet) -> Result<DataSet> {
    ds.drop_column(2)?;

    let mut names: Vec<String> = ds
        .headers
        .iter()
        .map(|n| n.replace("0/", "set_").replace("1/", "point_"))
        .collect();
    if names.len() < LEADING.len() {
        return Err(ScrapeError::structure(format!(
            "ranking table has {} columns, expected at least {}",
            names.len(),
            LEADING.len()
        )));
    }
    for (slot, fixed) in names.iter_mut().zip(LEADING) {
        *slot = s!(fixed);
    }
    let n = names.len();
    names[n - 1] = s!("point_ratio");
    names[n - 4] = s!("set_ratio");
    ds.set_headers(names)?;

    let teams = (0..ds.len())
        .map(|i| {
            let full = ds.text(i, "team_full");
            abbr_for(&full)
                .map(|a| Cell::Text(a.to_uppercase()))
                .ok_or(ScrapeError::UnknownTeam(full))
        })
        .collect::<Result<Vec<_>>>()?;
    ds.push_column("team", teams)?;
    Ok(ds)
}
