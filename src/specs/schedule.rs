// src/specs/schedule.rs

use scraper::{ElementRef, Html};

use crate::config::consts::SCHEDULE_URL;
use crate::core::html::{selector, walk_text, Step};
use crate::core::net::{Fetch, BROWSER_HEADERS};
use crate::core::sanitize::{bracket_list, first_trimmed, last_chars};
use crate::error::{Result, ScrapeError};
use crate::store::{Cell, DataSet, Record};

/// A finished match block; the exact class string selects played matches only.
const FINISHED_MATCH: &str = r#"div[class="vbw-mu--match vbw-mu-finished vbw-mu"]"#;

const DETAILS: [Step; 3] = [
    Step::tag("a"),
    Step::tag("div"),
    Step::class_is("div", "vbw-mu__info--details"),
];
const TEAM_ABBR: [Step; 4] = [
    Step::tag("a"),
    Step::tag("div"),
    Step::tag("div"),
    Step::class_is("div", "vbw-mu__team__name vbw-mu__team__name--abbr"),
];
const SCORE_HOME: [Step; 5] = [
    Step::tag("a"),
    Step::tag("div"),
    Step::tag("div"),
    Step::tag("div"),
    Step::class_has("div", "vbw-mu__score--home"),
];
const SCORE_AWAY: [Step; 5] = [
    Step::tag("a"),
    Step::tag("div"),
    Step::tag("div"),
    Step::tag("div"),
    Step::class_has("div", "vbw-mu__score--away"),
];
const SET_RESULTS: [Step; 4] = [
    Step::tag("a"),
    Step::tag("div"),
    Step::class_is("div", "vbw-mu__sets--result"),
    Step::tag("span"),
];

/// Volleyball matches go to at most five sets.
pub const MAX_SETS: usize = 5;

/// Upper bound for one side's points in a set. Deuce sets run long, but not
/// past this.
pub const MAX_SET_POINTS: u32 = 999;

pub const COLUMNS: [&str; 9] = [
    "matchid", "matchname", "teamhome", "teamaway", "scorehome", "awayhome",
    "result", "points_home", "points_away",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    /// Last five characters of the block's `matchid` attribute.
    pub match_id: String,
    pub match_name: String,
    pub team_home: String,
    pub team_away: String,
    pub score_home: String,
    pub score_away: String,
    /// Set scores flattened as home, away, home, away, …
    pub result: Vec<u32>,
}

impl MatchSummary {
    /// Per-set `(home, away)` pairs.
    pub fn sets(&self) -> Vec<(u32, u32)> {
        self.result.chunks_exact(2).map(|p| (p[0], p[1])).collect()
    }

    /// Sum of values at even positions.
    pub fn points_home(&self) -> u32 {
        self.result.iter().step_by(2).sum()
    }

    /// Sum of values at odd positions.
    pub fn points_away(&self) -> u32 {
        self.result.iter().skip(1).step_by(2).sum()
    }
}

/// Fetch the schedule page and extract every finished match.
pub fn fetch(fetcher: &dyn Fetch) -> Result<Vec<MatchSummary>> {
    let html_doc = fetcher.get(SCHEDULE_URL, BROWSER_HEADERS)?;
    let t = std::time::Instant::now();
    let out = parse_doc(&Html::parse_document(&html_doc));
    logd!("Schedule: parse in {:?}", t.elapsed());
    out
}

pub fn parse_doc(doc: &Html) -> Result<Vec<MatchSummary>> {
    let block_sel = selector(FINISHED_MATCH)?;
    doc.select(&block_sel).map(parse_block).collect()
}

fn parse_block(block: ElementRef<'_>) -> Result<MatchSummary> {
    let raw_id = block
        .value()
        .attr("matchid")
        .ok_or_else(|| ScrapeError::structure("finished match without matchid"))?;
    let match_id = last_chars(raw_id, 5);

    let nth = |path: &[Step], n: usize, what: &str| -> Result<String> {
        let nodes = walk_text(block, path);
        nodes
            .get(n)
            .map(|t| t.trim().to_string())
            .ok_or_else(|| ScrapeError::structure(format!("match {match_id}: no {what}")))
    };

    let match_name = first_trimmed(&walk_text(block, &DETAILS))
        .ok_or_else(|| ScrapeError::structure(format!("match {match_id}: no details")))?;
    let team_home = nth(&TEAM_ABBR, 0, "home team")?;
    let team_away = nth(&TEAM_ABBR, 1, "away team")?;
    let score_home = nth(&SCORE_HOME, 0, "home score")?;
    let score_away = nth(&SCORE_AWAY, 0, "away score")?;
    let result = parse_result_tokens(walk_text(block, &SET_RESULTS))?;

    Ok(MatchSummary { match_id, match_name, team_home, team_away, score_home, score_away, result })
}

/// Parse the textual form of a results list, e.g. `'[25, 20, 25, 18, -]'`:
/// quotes and the surrounding brackets are stripped, then the comma-separated
/// tokens go through `parse_result_tokens`.
pub fn parse_results(raw: &str) -> Result<Vec<u32>> {
    let unquoted: String = raw.chars().filter(|c| *c != '\'' && *c != '"').collect();
    let inner = unquoted.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    parse_result_tokens(inner.split(','))
}

/// Trim each token, drop the `-` placeholder of an unplayed set (and blanks),
/// and read the rest as set scores.
pub fn parse_result_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<u32>> {
    let mut out = Vec::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() || token == "-" {
            continue;
        }
        let v = token
            .parse::<u32>()
            .map_err(|e| ScrapeError::data_shape(format!("set score {token:?}: {e}")))?;
        if v > MAX_SET_POINTS {
            return Err(ScrapeError::data_shape(format!("set score {v} out of range")));
        }
        out.push(v);
    }
    if out.len() > MAX_SETS * 2 {
        return Err(ScrapeError::data_shape(format!(
            "{} set scores exceed {MAX_SETS} sets",
            out.len()
        )));
    }
    Ok(out)
}

/// One row per match plus the two derived point totals.
pub fn to_dataset(matches: &[MatchSummary]) -> DataSet {
    let mut ds = DataSet::new(COLUMNS.iter().map(|c| s!(*c)).collect());
    for m in matches {
        let values = [
            m.match_id.clone(),
            m.match_name.clone(),
            m.team_home.clone(),
            m.team_away.clone(),
            m.score_home.clone(),
            m.score_away.clone(),
            bracket_list(&m.result),
            m.points_home().to_string(),
            m.points_away().to_string(),
        ];
        let row: Record = COLUMNS
            .iter()
            .zip(values)
            .map(|(c, v)| (s!(*c), Cell::Text(v)))
            .collect();
        ds.rows.push(row);
    }
    ds
}

pub fn match_ids(matches: &[MatchSummary]) -> Vec<String> {
    matches.iter().map(|m| m.match_id.clone()).collect()
}
