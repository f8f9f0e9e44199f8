// src/specs/best_players.rs

use scraper::Html;

use crate::config::consts::STATISTICS_URL;
use crate::core::net::Fetch;
use crate::engine::{extract, TableSpec};
use crate::error::Result;
use crate::store::{Cell, DataSet};

/// Leaderboards on the statistics page, in table order. Each name is also the
/// output file stem.
pub const BOARDS: [&str; 7] = [
    "best-scorers",
    "best-spikers",
    "best-blockers",
    "best-servers",
    "best-setters",
    "best-diggers",
    "best-receivers",
];

/// All seven leaderboards from a single page load.
pub fn fetch(fetcher: &dyn Fetch) -> Result<Vec<(&'static str, DataSet)>> {
    let html_doc = fetcher.get(STATISTICS_URL, &[])?;
    parse_doc(&Html::parse_document(&html_doc))
}

pub fn parse_doc(doc: &Html) -> Result<Vec<(&'static str, DataSet)>> {
    BOARDS
        .iter()
        .enumerate()
        .map(|(i, board)| Ok((*board, shape(extract(doc, &TableSpec::nth(i))?)?)))
        .collect()
}

/// The last row of every leaderboard is a footer; drop it and number the rest.
pub fn shape(mut ds: DataSet) -> Result<DataSet> {
    ds.drop_last_row();
    let ranks = (1..=ds.len()).map(|r| Cell::Text(r.to_string())).collect();
    ds.push_column("rank", ranks)?;
    Ok(ds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[(&str, &str)]) -> String {
        let body: String = rows
            .iter()
            .map(|(name, total)| format!("<tr><td>{name}</td><td>{total}</td></tr>"))
            .collect();
        format!("<table><thead><tr><th>Player Name</th><th>Total</th></tr></thead><tbody>{body}</tbody></table>")
    }

    #[test]
    fn drops_footer_and_ranks() {
        let page = board(&[("Boskovic", "301"), ("Egonu", "288"), ("Show all", "")]).repeat(7);
        let boards = parse_doc(&Html::parse_document(&page)).unwrap();
        assert_eq!(boards.len(), 7);

        let (name, scorers) = &boards[0];
        assert_eq!(*name, "best-scorers");
        assert_eq!(scorers.headers, vec!["player_name", "total", "rank"]);
        assert_eq!(scorers.to_rows(), vec![vec!["Boskovic", "301", "1"], vec!["Egonu", "288", "2"]]);
    }

    #[test]
    fn empty_board_stays_empty() {
        let ds = shape(DataSet::new(vec![s!("total")])).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.headers, vec!["total", "rank"]);
    }
}
