// src/engine/types.rs

/// Where a table sits on its page and how its header is read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSpec {
    /// Zero-based index among all `<table>` elements of the page.
    pub table_idx: usize,
    /// Header text comes from the first `<span>` inside each `<th>`.
    pub header_span: bool,
    /// Which `<thead>` row holds the header cells.
    pub th_row: usize,
    /// Unlabeled leading columns, named `""` before deduplication.
    pub prefix_col: usize,
    /// Caller-supplied names; header detection is skipped.
    pub override_column: Option<Vec<String>>,
    /// Cells with `<span>` children become `Cell::Spans`.
    pub td_span: bool,
}

impl TableSpec {
    pub fn nth(table_idx: usize) -> Self {
        Self { table_idx, ..Self::default() }
    }

    pub fn th_row(mut self, row: usize) -> Self {
        self.th_row = row;
        self
    }

    pub fn prefix_col(mut self, n: usize) -> Self {
        self.prefix_col = n;
        self
    }

    pub fn header_span(mut self) -> Self {
        self.header_span = true;
        self
    }

    pub fn td_span(mut self) -> Self {
        self.td_span = true;
        self
    }

    pub fn columns<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.override_column = Some(names.into_iter().map(Into::into).collect());
        self
    }
}
