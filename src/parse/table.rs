//! Pipe-delimited markdown table parsing.

use crate::model::Table;
use log::debug;

/// Parse a block of text as a markdown table.
///
/// Returns `None` when the block does not qualify (fewer than two
/// pipe-containing lines, or no non-empty header cells); the caller
/// falls back to text-block parsing.
pub fn parse_table_block(block: &str) -> Option<Table> {
    let table_lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains('|'))
        .collect();

    if table_lines.len() < 2 {
        return None;
    }

    let headers: Vec<String> = split_cells(table_lines[0])
        .into_iter()
        .filter(|cell| !cell.is_empty())
        .collect();
    if headers.is_empty() {
        debug!("table candidate has no usable header cells");
        return None;
    }

    // First separator row found after the header marks where data
    // starts; without one, everything after the header is data.
    let mut data_start = 1;
    for (i, line) in table_lines.iter().enumerate().skip(1) {
        if is_separator(line) {
            data_start = i + 1;
            break;
        }
    }

    let mut table = Table::with_headers(headers);
    for line in &table_lines[data_start..] {
        let cells = split_cells(line);
        if !table.push_row(cells) {
            debug!("dropping table row with mismatched cell count: {line:?}");
        }
    }

    Some(table)
}

/// Strip outer pipes, split on `|`, and trim each cell.
fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Separator rows contain a dash and nothing outside `{-, |, :, space}`.
fn is_separator(line: &str) -> bool {
    line.contains('-') && line.chars().all(|c| matches!(c, '-' | '|' | ':' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let table = parse_table_block("A | B\n---|---\n1 | 2").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_outer_pipes_and_alignment() {
        let table = parse_table_block("| A | B |\n|:---|---:|\n| 1 | 2 |").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_no_separator_all_data() {
        let table = parse_table_block("A | B\n1 | 2\n3 | 4").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_ragged_row_dropped() {
        let table = parse_table_block("A | B\n---|---\n1 | 2 | 3").unwrap();
        assert_eq!(table.headers.len(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_single_pipe_line_not_a_table() {
        assert!(parse_table_block("just a | single line").is_none());
    }

    #[test]
    fn test_empty_header_falls_back() {
        assert!(parse_table_block("| | |\n---|---\n1 | 2").is_none());
    }

    #[test]
    fn test_empty_middle_cells_kept() {
        let table = parse_table_block("A | B | C\n---|---|---\n1 |  | 3").unwrap();
        assert_eq!(table.rows, vec![vec!["1", "", "3"]]);
    }

    #[test]
    fn test_separator_detection() {
        assert!(is_separator("---|---"));
        assert!(is_separator("| :--- | ---: |"));
        assert!(!is_separator("a - b"));
        assert!(!is_separator("|||"));
    }
}
