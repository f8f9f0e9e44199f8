// src/specs/players.rs

use scraper::Html;

use crate::config::consts::{roster_url, BASE_URL};
use crate::config::teams::{roster_slug, TEAMS};
use crate::core::html::{nth_table, selector, text_of};
use crate::core::net::Fetch;
use crate::engine::{extract, TableSpec};
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::store::{concat, Cell, DataSet};

/// Rosters of every team in `TEAMS`, concatenated in table order.
pub fn collect(fetcher: &dyn Fetch, mut progress: Option<&mut dyn Progress>) -> Result<DataSet> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(TEAMS.len());
    }

    let mut parts = Vec::with_capacity(TEAMS.len());
    for (i, (name, abbr)) in TEAMS.iter().enumerate() {
        parts.push(fetch_team(fetcher, name, abbr)?);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, name);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(concat(parts))
}

/// One roster page plus one request per player for the position.
pub fn fetch_team(fetcher: &dyn Fetch, name: &str, abbr: &str) -> Result<DataSet> {
    let url = roster_url(&roster_slug(name, abbr));
    let html_doc = fetcher.get(&url, &[])?;

    let (mut roster, links) = {
        let doc = Html::parse_document(&html_doc);
        let roster = shape_roster(extract(&doc, &TableSpec::nth(0))?, abbr)?;
        (roster, player_links(&doc)?)
    };

    let positions = links
        .iter()
        .map(|link| fetch_position(fetcher, link).map(Cell::Text))
        .collect::<Result<Vec<_>>>()?;
    roster.push_column("position", positions)?;

    logd!("Roster {abbr}: {} players", roster.len());
    Ok(roster)
}

/// Drop the leading index column and tag every row with the team.
pub fn shape_roster(mut roster: DataSet, abbr: &str) -> Result<DataSet> {
    roster.drop_column(0)?;
    let team = abbr.to_uppercase();
    let values = vec![Cell::Text(team); roster.len()];
    roster.push_column("team", values)?;
    Ok(roster)
}

/// Absolute URLs of every linked player page in the roster table.
pub fn player_links(doc: &Html) -> Result<Vec<String>> {
    let table = nth_table(doc, 0)?;
    let a_sel = selector("a[href]")?;
    Ok(table
        .select(&a_sel)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| join!(BASE_URL, href))
        .collect())
}

pub fn fetch_position(fetcher: &dyn Fetch, url: &str) -> Result<String> {
    let html_doc = fetcher.get(url, &[])?;
    parse_position(&Html::parse_document(&html_doc))
}

/// Second `<span>` of the first list item in the first `div.col-1-3`.
pub fn parse_position(doc: &Html) -> Result<String> {
    let col_sel = selector("div.col-1-3")?;
    let li_sel = selector("li")?;
    let span_sel = selector("span")?;

    let col = doc
        .select(&col_sel)
        .next()
        .ok_or_else(|| ScrapeError::structure("player page has no div.col-1-3"))?;
    let li = col
        .select(&li_sel)
        .next()
        .ok_or_else(|| ScrapeError::structure("player bio has no list item"))?;
    let span = li
        .select(&span_sel)
        .nth(1)
        .ok_or_else(|| ScrapeError::structure("player bio item has no value span"))?;
    Ok(text_of(span))
}
