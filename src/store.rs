// src/store.rs
use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, ScrapeError};

/// One table cell. `Spans` holds the sub-span texts of a cell and renders
/// them joined with `-`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Spans(Vec<String>),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(t) => f.write_str(t),
            Cell::Spans(parts) => f.write_str(&parts.join("-")),
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s!(s))
    }
}

/// Column name → cell. A column missing from a record is an empty cell.
pub type Record = HashMap<String, Cell>;

/// Ordered columns plus records, the unit every scrape stage produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rendered text of one cell; empty when absent.
    pub fn text(&self, row: usize, column: &str) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|c| c.to_string())
            .unwrap_or_default()
    }

    /// Rows as ordered string vectors, absent cells as `""`.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                self.headers
                    .iter()
                    .map(|h| r.get(h).map(|c| c.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    pub fn drop_column(&mut self, idx: usize) -> Result<()> {
        if idx >= self.headers.len() {
            return Err(ScrapeError::structure(format!(
                "cannot drop column {idx} of {}",
                self.headers.len()
            )));
        }
        let name = self.headers.remove(idx);
        for r in &mut self.rows {
            r.remove(&name);
        }
        Ok(())
    }

    pub fn drop_last_row(&mut self) {
        self.rows.pop();
    }

    /// Positional rename: column `i` becomes `names[i]`.
    pub fn set_headers(&mut self, names: Vec<String>) -> Result<()> {
        if names.len() != self.headers.len() {
            return Err(ScrapeError::structure(format!(
                "{} names for {} columns",
                names.len(),
                self.headers.len()
            )));
        }
        for r in &mut self.rows {
            let mut renamed = Record::with_capacity(r.len());
            for (old, new) in self.headers.iter().zip(&names) {
                if let Some(cell) = r.remove(old) {
                    renamed.insert(new.clone(), cell);
                }
            }
            *r = renamed;
        }
        self.headers = names;
        Ok(())
    }

    /// Append a column with one value per row.
    pub fn push_column(&mut self, name: &str, values: Vec<Cell>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(ScrapeError::structure(format!(
                "column {name:?} has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }
        for (r, v) in self.rows.iter_mut().zip(values) {
            r.insert(s!(name), v);
        }
        self.headers.push(s!(name));
        Ok(())
    }

    /// Rewrite every cell of `column`. A row lacking the column is an error.
    pub fn map_column<F>(&mut self, column: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Cell) -> Result<Cell>,
    {
        for (i, r) in self.rows.iter_mut().enumerate() {
            let cell = r
                .get_mut(column)
                .ok_or_else(|| ScrapeError::structure(format!("row {i} has no {column:?}")))?;
            *cell = f(cell)?;
        }
        Ok(())
    }
}

/// Stack tables in the given order. Columns are the union of all inputs in
/// first-seen order; rows keep insertion order.
pub fn concat(parts: impl IntoIterator<Item = DataSet>) -> DataSet {
    let mut out = DataSet::default();
    for part in parts {
        for h in part.headers {
            if !out.headers.contains(&h) {
                out.headers.push(h);
            }
        }
        out.rows.extend(part.rows);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataSet {
        let mut ds = DataSet::new(headers.iter().map(|h| s!(*h)).collect());
        for row in rows {
            let rec = headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (s!(*h), Cell::from(*v)))
                .collect();
            ds.rows.push(rec);
        }
        ds
    }

    #[test]
    fn concat_unions_columns_and_keeps_order() {
        let a = table(&["name", "team"], &[&["A", "USA"], &["B", "USA"]]);
        let b = table(&["name", "position"], &[&["C", "OH"]]);
        let all = concat([a, b]);
        assert_eq!(all.headers, vec!["name", "team", "position"]);
        assert_eq!(
            all.to_rows(),
            vec![vec!["A", "USA", ""], vec!["B", "USA", ""], vec!["C", "", "OH"]]
        );
    }

    #[test]
    fn positional_rename_moves_cells() {
        let mut ds = table(&["a", "b"], &[&["1", "2"]]);
        ds.set_headers(vec![s!("b"), s!("c")]).unwrap();
        assert_eq!(ds.text(0, "b"), "1");
        assert_eq!(ds.text(0, "c"), "2");
        assert!(ds.set_headers(vec![s!("x")]).is_err());
    }

    #[test]
    fn drop_and_push_columns() {
        let mut ds = table(&["idx", "name"], &[&["0", "A"], &["1", "B"]]);
        ds.drop_column(0).unwrap();
        ds.push_column("team", vec![Cell::from("ITA"), Cell::from("ITA")]).unwrap();
        assert_eq!(ds.headers, vec!["name", "team"]);
        assert_eq!(ds.to_rows()[1], vec!["B", "ITA"]);
        assert!(ds.push_column("rank", vec![Cell::from("1")]).is_err());
        assert!(ds.drop_column(5).is_err());
    }

    #[test]
    fn spans_render_joined() {
        let c = Cell::Spans(vec![s!("25"), s!("23")]);
        assert_eq!(c.to_string(), "25-23");
    }
}
