// src/specs/round_robin.rs

use crate::config::consts::ROUND1_URL;
use crate::core::net::Fetch;
use crate::engine::{fetch_table, TableSpec};
use crate::error::{Result, ScrapeError};
use crate::store::{Cell, DataSet};

pub const COLUMNS: [&str; 12] = [
    "number", "date", "teams", "sets",
    "set1_point", "set2_point", "set3_point", "set4_point", "set5_point",
    "pionts", "time", "audience",
];

/// Results table (second table of the round-1 page), multi-span cells kept.
pub fn table_spec() -> TableSpec {
    TableSpec::nth(1).columns(COLUMNS).td_span()
}

pub fn fetch(fetcher: &dyn Fetch) -> Result<DataSet> {
    shape(fetch_table(fetcher, ROUND1_URL, &table_spec())?)
}

pub fn shape(mut ds: DataSet) -> Result<DataSet> {
    for set in 1..=5 {
        let column = format!("set{set}_point");
        ds.map_column(&column, |cell| clean_set_point(&cell.to_string()).map(Cell::Text))?;
    }
    Ok(ds)
}

/// Normalize a set score to `H-A`. Each side keeps two characters when the
/// character next to the outer edge is a digit, else one. `-` (set not
/// played) passes through.
pub fn clean_set_point(raw: &str) -> Result<String> {
    if raw == "-" {
        return Ok(s!(raw));
    }
    let c: Vec<char> = raw.chars().collect();
    let n = c.len();
    if n < 2 {
        return Err(ScrapeError::data_shape(format!("set score {raw:?} too short")));
    }
    let home: String = if c[1].is_numeric() { c[..2].iter().collect() } else { c[0].to_string() };
    let away: String = if c[n - 2].is_numeric() { c[n - 2..].iter().collect() } else { c[n - 1].to_string() };
    Ok(join!(&home, "-", &away))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::extract;
    use scraper::Html;

    #[test]
    fn set_points_cleaned() {
        assert_eq!(clean_set_point("25-20").unwrap(), "25-20");
        assert_eq!(clean_set_point("9-25").unwrap(), "9-25");
        assert_eq!(clean_set_point("25-9").unwrap(), "25-9");
        assert_eq!(clean_set_point("-").unwrap(), "-");
        assert!(clean_set_point("7").is_err());
    }

    #[test]
    fn parses_results_table() {
        let page = r#"
            <table><tbody><tr><td>ignored</td></tr></tbody></table>
            <table>
              <thead><tr><th>Match</th></tr></thead>
              <tbody>
                <tr>
                  <td>1</td><td>21 May 2019</td><td><span>USA</span><span>ITA</span></td><td><span>3</span><span>1</span></td>
                  <td><span>25</span><span>20</span></td><td><span>9</span><span>25</span></td>
                  <td><span>25</span><span>18</span></td><td><span>25</span><span>23</span></td><td>-</td>
                  <td><span>84</span><span>86</span></td><td>1:41</td><td>3500</td>
                </tr>
              </tbody>
            </table>"#;
        let ds = shape(extract(&Html::parse_document(page), &table_spec()).unwrap()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.text(0, "teams"), "USA-ITA");
        assert_eq!(ds.text(0, "set1_point"), "25-20");
        assert_eq!(ds.text(0, "set2_point"), "9-25");
        assert_eq!(ds.text(0, "set5_point"), "-");
        assert_eq!(ds.text(0, "audience"), "3500");
    }

    #[test]
    fn short_row_is_structure_error() {
        let page = r#"<table></table><table><tbody><tr><td>1</td><td>date</td></tr></tbody></table>"#;
        let ds = extract(&Html::parse_document(page), &table_spec()).unwrap();
        assert!(matches!(shape(ds), Err(ScrapeError::Structure { .. })));
    }
}
