// src/specs/match_detail.rs
//! Per-player statistics of one finished match.
//!
//! The page carries seven tables per team (scoring overview plus attack,
//! block, serve, reception, dig and set), all tagged with the same
//! `data-team`. Row *i* of every table is taken to be the same player; there
//! is no per-player key to join on.
//!
//! What is read from which cell is the `FIELDS` table below; one loop walks it.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use scraper::{ElementRef, Html};

use crate::config::consts::match_url;
use crate::core::html::{child_elements, own_text, selector, walk, walk_text, Step};
use crate::core::net::{Fetch, BROWSER_HEADERS};
use crate::core::sanitize::first_trimmed;
use crate::error::{Result, ScrapeError};
use crate::store::{Cell, DataSet, Record};

const TEAM_ABBR_CLASS: &str = "vbw-mu__team__name vbw-mu__team__name--abbr";

/// Value written when an efficiency cell is absent or blank.
pub const PLACEHOLDER: &str = " ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Scoring,
    Attack,
    Block,
    Serve,
    Reception,
    Dig,
    Set,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Scoring,
        Category::Attack,
        Category::Block,
        Category::Serve,
        Category::Reception,
        Category::Dig,
        Category::Set,
    ];

    fn stats_name(self) -> &'static str {
        match self {
            Category::Scoring => "scoring",
            Category::Attack => "attack",
            Category::Block => "block",
            Category::Serve => "serve",
            Category::Reception => "reception",
            Category::Dig => "dig",
            Category::Set => "set",
        }
    }

    /// Substring of the `class` attribute that identifies this table.
    pub fn table_class(self) -> String {
        format!(
            "vbw-o-table vbw-match-player-statistic-table vbw-stats-{} vbw-set-all",
            self.stats_name()
        )
    }

    /// Player rows of the scoring and attack tables carry the `--scoring`
    /// modifier; the other five use `--attack`.
    pub fn row_class(self) -> &'static str {
        match self {
            Category::Scoring | Category::Attack => {
                "vbw-o-table__row vbw-o-table__row--scoring vbw-stats-player"
            }
            _ => "vbw-o-table__row vbw-o-table__row--attack vbw-stats-player",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub category: Category,
    /// Full `class` attribute of the `<td>`.
    pub cell: &'static str,
    pub column: &'static str,
    /// Write `PLACEHOLDER` instead of failing when the cell is missing.
    pub placeholder: bool,
}

macro_rules! field {
    ($cat:ident, $cell:literal => $col:literal) => {
        FieldSpec {
            category: Category::$cat,
            cell: concat!("vbw-o-table__cell ", $cell),
            column: $col,
            placeholder: false,
        }
    };
    ($cat:ident, $cell:literal => $col:literal, or_blank) => {
        FieldSpec {
            category: Category::$cat,
            cell: concat!("vbw-o-table__cell ", $cell),
            column: $col,
            placeholder: true,
        }
    };
}

/// Output columns after `schedule_id` and `nationality`, in file order.
#[rustfmt::skip]
pub const FIELDS: [FieldSpec; 37] = [
    field!(Scoring, "shirtnumber" => "number"),
    field!(Scoring, "playername" => "name"),
    field!(Scoring, "position" => "position"),
    field!(Scoring, "attacks" => "attackpoints"),
    field!(Scoring, "blocks" => "blockpoints"),
    field!(Scoring, "serves" => "servepoints"),
    field!(Scoring, "efficiency-percentage" => "efficency", or_blank),
    field!(Scoring, "total-abs" => "totalabs"),

    field!(Attack, "point" => "attack_pt"),
    field!(Attack, "errors" => "attack_err"),
    field!(Attack, "attempts" => "attack_att"),
    field!(Attack, "total" => "attack_tot"),
    field!(Attack, "efficiency-percentage" => "attack_eff", or_blank),

    field!(Block, "point" => "block_pt"),
    field!(Block, "errors" => "block_err"),
    field!(Block, "touches" => "block_touches"),
    field!(Block, "total" => "block_tot"),
    field!(Block, "efficiency-percentage" => "block_eff", or_blank),

    field!(Serve, "point" => "serve_pt"),
    field!(Serve, "errors" => "serve_err"),
    field!(Serve, "attempts" => "serve_attempts"),
    field!(Serve, "total" => "serve_tot"),
    field!(Serve, "efficiency-percentage" => "serve_eff", or_blank),

    field!(Reception, "successful" => "reception_successful"),
    field!(Reception, "errors" => "reception_err"),
    field!(Reception, "attempts" => "reception_attempts"),
    field!(Reception, "total" => "reception_tot"),
    field!(Reception, "efficiency-percentage" => "reception_eff", or_blank),

    // Column names lag the cells by one here; kept as published.
    field!(Dig, "digs" => "dig_digs"),
    field!(Dig, "errors" => "dig_err"),
    field!(Dig, "attempts" => "dig_tot"),
    field!(Dig, "total" => "dig_eff", or_blank),

    field!(Set, "successful" => "set_pt"),
    field!(Set, "errors" => "set_err"),
    field!(Set, "attempts" => "set_attempts"),
    field!(Set, "total" => "set_tot"),
    field!(Set, "efficiency-percentage" => "set_eff", or_blank),
];

/// `schedule_id, nationality` followed by every `FIELDS` column.
pub fn columns() -> Vec<String> {
    ["schedule_id", "nationality"]
        .into_iter()
        .chain(FIELDS.iter().map(|f| f.column))
        .map(|c| s!(c))
        .collect()
}

/// One player's line for one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerMatchStat {
    pub schedule_id: String,
    pub nationality: String,
    /// Aligned with `FIELDS`.
    pub values: Vec<String>,
}

impl PlayerMatchStat {
    pub fn get(&self, column: &str) -> Option<&str> {
        FIELDS
            .iter()
            .position(|f| f.column == column)
            .map(|i| self.values[i].as_str())
    }
}

/// Fetch one match page. `row_pause` is slept after every player row.
pub fn fetch(fetcher: &dyn Fetch, match_id: &str, row_pause: Duration) -> Result<Vec<PlayerMatchStat>> {
    let html_doc = fetcher.get(&match_url(match_id), BROWSER_HEADERS)?;
    let doc = Html::parse_document(&html_doc);
    parse_doc(&doc, match_id, row_pause)
}

pub fn parse_doc(doc: &Html, match_id: &str, row_pause: Duration) -> Result<Vec<PlayerMatchStat>> {
    let nations = nationalities(doc)?;
    let tables = stat_tables(doc)?;

    let mut out = Vec::new();
    for team in team_order(&tables)? {
        let nationality = nations.get(team).cloned().ok_or_else(|| {
            ScrapeError::structure(format!("match {match_id}: no team link for data-team {team:?}"))
        })?;

        let rows: HashMap<Category, Vec<ElementRef<'_>>> = Category::ALL
            .iter()
            .map(|&cat| (cat, player_rows(&tables, cat, team)))
            .collect();
        let players = rows[&Category::Scoring].len();
        for cat in Category::ALL {
            let n = rows[&cat].len();
            if n != players {
                logd!("match {match_id} team {team}: {n} {cat:?} rows vs {players} scoring rows");
            }
        }

        for i in 0..players {
            let values = FIELDS
                .iter()
                .map(|f| read_field(rows[&f.category].get(i).copied(), f))
                .collect::<Result<Vec<_>>>()
                .map_err(|e| match e {
                    ScrapeError::Structure { context } => ScrapeError::structure(format!(
                        "match {match_id} team {team} row {i}: {context}"
                    )),
                    other => other,
                })?;
            out.push(PlayerMatchStat {
                schedule_id: s!(match_id),
                nationality: nationality.clone(),
                values,
            });
            if !row_pause.is_zero() {
                thread::sleep(row_pause);
            }
        }
    }
    Ok(out)
}

pub fn to_dataset(stats: &[PlayerMatchStat]) -> DataSet {
    let headers = columns();
    let mut ds = DataSet::new(headers.clone());
    for stat in stats {
        let values = [stat.schedule_id.clone(), stat.nationality.clone()]
            .into_iter()
            .chain(stat.values.iter().cloned());
        let row: Record = headers.iter().cloned().zip(values.map(Cell::Text)).collect();
        ds.rows.push(row);
    }
    ds
}

/// Team link key (`href` minus its first char) → abbreviation shown in the link.
fn nationalities(doc: &Html) -> Result<HashMap<String, String>> {
    const NAV: [Step; 10] = [
        Step::tag("div"),
        Step::tag("div"),
        Step::tag("div"),
        Step::tag("div"),
        Step::tag("div"),
        Step::tag("div"),
        Step::tag("div"),
        Step::tag("ul"),
        Step::tag("li"),
        Step::tag("a"),
    ];
    let section_sel = selector("section")?;

    let mut map = HashMap::new();
    for section in doc.select(&section_sel) {
        for link in walk(section, &NAV) {
            let href = link
                .value()
                .attr("href")
                .ok_or_else(|| ScrapeError::structure("team link without href"))?;
            let abbr = first_trimmed(&walk_text(link, &[Step::class_is("div", TEAM_ABBR_CLASS)]))
                .ok_or_else(|| ScrapeError::structure(format!("team link {href:?} has no abbreviation")))?;
            map.insert(href.chars().skip(1).collect(), abbr);
        }
    }
    Ok(map)
}

type StatTables<'a> = HashMap<Category, Vec<ElementRef<'a>>>;

fn stat_tables(doc: &Html) -> Result<StatTables<'_>> {
    let mut tables = HashMap::new();
    for cat in Category::ALL {
        let sel = selector(&format!(r#"table[class*="{}"]"#, cat.table_class()))?;
        tables.insert(cat, doc.select(&sel).collect());
    }
    Ok(tables)
}

/// `data-team` of every scoring table, in page order.
fn team_order<'a>(tables: &StatTables<'a>) -> Result<Vec<&'a str>> {
    tables[&Category::Scoring]
        .iter()
        .map(|t| {
            t.value()
                .attr("data-team")
                .ok_or_else(|| ScrapeError::structure("scoring table without data-team"))
        })
        .collect()
}

fn player_rows<'a>(tables: &StatTables<'a>, cat: Category, team: &str) -> Vec<ElementRef<'a>> {
    let path = [Step::tag("tbody"), Step::class_has("tr", cat.row_class())];
    tables[&cat]
        .iter()
        .filter(|t| t.value().attr("data-team") == Some(team))
        .flat_map(|t| walk(*t, &path))
        .collect()
}

fn read_field(row: Option<ElementRef<'_>>, field: &FieldSpec) -> Result<String> {
    let Some(row) = row else {
        return Err(ScrapeError::structure(format!("no {:?} row", field.category)));
    };
    let text = child_elements(row)
        .find(|td| td.value().name() == "td" && td.value().attr("class") == Some(field.cell))
        .and_then(|td| first_trimmed(&own_text(td)));

    match text {
        Some(t) if field.placeholder && t.is_empty() => Ok(s!(PLACEHOLDER)),
        Some(t) => Ok(t),
        None if field.placeholder => Ok(s!(PLACEHOLDER)),
        None => Err(ScrapeError::structure(format!("no `{}` cell", field.cell))),
    }
}
