// src/engine/engine.rs
use scraper::{ElementRef, Html};

use crate::core::html::{nth_table, selector, text_of};
use crate::core::net::Fetch;
use crate::engine::columns::derive_names;
use crate::engine::types::TableSpec;
use crate::error::{Result, ScrapeError};
use crate::store::{Cell, DataSet, Record};

/// GET `url` with default headers and extract one table.
pub fn fetch_table(fetcher: &dyn Fetch, url: &str, spec: &TableSpec) -> Result<DataSet> {
    let html_doc = fetcher.get(url, &[])?;
    let doc = Html::parse_document(&html_doc);
    extract(&doc, spec)
}

/// Turn table `spec.table_idx` into records. Body rows without any `<td>`
/// (section separators) are skipped.
pub fn extract(doc: &Html, spec: &TableSpec) -> Result<DataSet> {
    let t = std::time::Instant::now();
    let table = nth_table(doc, spec.table_idx)?;

    let headers = match &spec.override_column {
        Some(cols) => cols.clone(),
        None => read_headers(table, spec)?,
    };

    let tbody_sel = selector("tbody")?;
    let tr_sel = selector("tr")?;
    let td_sel = selector("td")?;
    let span_sel = selector("span")?;

    let tbody = table
        .select(&tbody_sel)
        .next()
        .ok_or_else(|| ScrapeError::structure(format!("table #{} has no body", spec.table_idx)))?;

    let mut out = DataSet::new(headers);
    for (row_ix, tr) in tbody.select(&tr_sel).enumerate() {
        let tds: Vec<ElementRef> = tr.select(&td_sel).collect();
        if tds.is_empty() {
            continue;
        }
        if tds.len() > out.headers.len() {
            return Err(ScrapeError::structure(format!(
                "table #{} row {row_ix} has {} cells for {} columns",
                spec.table_idx,
                tds.len(),
                out.headers.len()
            )));
        }

        let mut record = Record::with_capacity(tds.len());
        for (name, td) in out.headers.iter().zip(tds) {
            let cell = if spec.td_span {
                let spans: Vec<String> = td.select(&span_sel).map(text_of).collect();
                if spans.is_empty() { Cell::Text(text_of(td)) } else { Cell::Spans(spans) }
            } else {
                Cell::Text(text_of(td))
            };
            record.insert(name.clone(), cell);
        }
        out.rows.push(record);
    }

    logd!("Table #{}: {} rows in {:?}", spec.table_idx, out.len(), t.elapsed());
    Ok(out)
}

fn read_headers(table: ElementRef<'_>, spec: &TableSpec) -> Result<Vec<String>> {
    let thead_sel = selector("thead")?;
    let tr_sel = selector("tr")?;
    let th_sel = selector("th")?;
    let span_sel = selector("span")?;

    let thead = table
        .select(&thead_sel)
        .next()
        .ok_or_else(|| ScrapeError::structure(format!("table #{} has no header", spec.table_idx)))?;
    let row = thead.select(&tr_sel).nth(spec.th_row).ok_or_else(|| {
        ScrapeError::structure(format!("table #{} has no header row {}", spec.table_idx, spec.th_row))
    })?;

    let mut labels = Vec::new();
    for th in row.select(&th_sel) {
        let label = if spec.header_span {
            let span = th.select(&span_sel).next().ok_or_else(|| {
                ScrapeError::structure(format!("table #{} header cell without <span>", spec.table_idx))
            })?;
            text_of(span)
        } else {
            text_of(th)
        };
        labels.push(label);
    }

    Ok(derive_names(&labels, spec.prefix_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn skips_rows_without_data_cells() {
        let d = doc(r#"
            <table>
              <thead><tr><th>Name</th><th>Pts</th></tr></thead>
              <tbody>
                <tr><th colspan="2">Pool A</th></tr>
                <tr><td>Boskovic</td><td>31</td></tr>
                <tr><td>Egonu</td><td>28</td></tr>
              </tbody>
            </table>"#);
        let ds = extract(&d, &TableSpec::nth(0)).unwrap();
        assert_eq!(ds.headers, vec!["name", "pts"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.text(1, "name"), "Egonu");
    }

    #[test]
    fn picks_table_by_index_and_header_row() {
        let d = doc(r#"
            <table><tbody><tr><td>ignored</td></tr></tbody></table>
            <table>
              <thead>
                <tr><th>Group</th></tr>
                <tr><th>Won</th><th>Lost</th><th>Won</th></tr>
              </thead>
              <tbody><tr><td>3</td><td>1</td><td>9</td></tr></tbody>
            </table>"#);
        let ds = extract(&d, &TableSpec::nth(1).th_row(1).prefix_col(2)).unwrap();
        assert_eq!(ds.headers, vec!["", "0/", "won", "lost", "0/won"]);
        // Fewer cells than columns: leading columns are filled, the rest stay absent.
        assert_eq!(ds.text(0, ""), "3");
        assert_eq!(ds.text(0, "0/"), "1");
        assert_eq!(ds.text(0, "won"), "9");
        assert!(ds.rows[0].get("lost").is_none());
        assert!(ds.rows[0].get("0/won").is_none());
    }

    #[test]
    fn header_span_reads_nested_label() {
        let d = doc(r#"
            <table>
              <thead><tr><th><span>Shirt Number</span><span>#</span></th></tr></thead>
              <tbody><tr><td>7</td></tr></tbody>
            </table>"#);
        let ds = extract(&d, &TableSpec::nth(0).header_span()).unwrap();
        assert_eq!(ds.headers, vec!["shirt_number"]);
    }

    #[test]
    fn td_span_keeps_sub_spans() {
        let d = doc(r#"
            <table>
              <tbody>
                <tr><td>1</td><td><span>25</span><span>20</span></td></tr>
              </tbody>
            </table>"#);
        let spec = TableSpec::nth(0).columns(["number", "set1_point"]).td_span();
        let ds = extract(&d, &spec).unwrap();
        assert_eq!(ds.rows[0]["set1_point"], Cell::Spans(vec![s!("25"), s!("20")]));
        assert_eq!(ds.text(0, "set1_point"), "25-20");
        assert_eq!(ds.rows[0]["number"], Cell::Text(s!("1")));
    }

    #[test]
    fn structure_errors_are_explicit() {
        let no_table = doc("<p>maintenance</p>");
        assert!(matches!(
            extract(&no_table, &TableSpec::nth(0)),
            Err(ScrapeError::Structure { .. })
        ));

        let no_header_row = doc(r#"
            <table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>"#);
        assert!(matches!(
            extract(&no_header_row, &TableSpec::nth(0).th_row(1)),
            Err(ScrapeError::Structure { .. })
        ));

        let too_wide = doc(r#"
            <table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"#);
        assert!(matches!(
            extract(&too_wide, &TableSpec::nth(0)),
            Err(ScrapeError::Structure { .. })
        ));
    }
}
