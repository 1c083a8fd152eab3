//! Table types.

use serde::{Deserialize, Serialize};

/// A grid table parsed from pipe-delimited markdown.
///
/// Every row is guaranteed to have the same number of cells as the
/// header; rows with a mismatched cell count are dropped at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells (rendered bold)
    pub headers: Vec<String>,

    /// Data rows, each the same length as `headers`
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with headers and no data rows.
    pub fn with_headers<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row. Returns false (and drops the row) if its cell
    /// count does not match the header.
    pub fn push_row(&mut self, row: Vec<String>) -> bool {
        if row.len() != self.headers.len() {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no headers.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Get a tab-separated plain text representation.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_with_headers() {
        let table = Table::with_headers(["Name", "Age"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_push_row_mismatch_dropped() {
        let mut table = Table::with_headers(["A", "B"]);
        assert!(table.push_row(vec!["1".into(), "2".into()]));
        assert!(!table.push_row(vec!["only one".into()]));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_plain_text() {
        let mut table = Table::with_headers(["A", "B"]);
        table.push_row(vec!["1".into(), "2".into()]);
        assert_eq!(table.plain_text(), "A\tB\n1\t2");
    }
}
