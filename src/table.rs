use crate::block::{Alignment, Cell, Table};
use crate::lines::is_table_start;

/// Parse a pipe table starting at `lines[0]`.
///
/// Returns the table and the number of lines consumed, or `None` when the
/// second line is not a separator row.
pub fn parse_table(lines: &[&str]) -> Option<(Table, usize)> {
    if !is_table_start(lines) {
        return None;
    }

    let header: Vec<Cell> = split_row(lines[0])
        .into_iter()
        .map(|text| Cell { text })
        .collect();

    let separator = split_row(lines[1]);
    let align = (0..header.len())
        .map(|column| {
            separator
                .get(column)
                .map_or(Alignment::Unspecified, |cell| alignment(cell))
        })
        .collect();

    // Body rows run until the first line without a pipe
    let rows: Vec<Vec<Cell>> = lines[2..]
        .iter()
        .take_while(|line| line.contains('|'))
        .map(|line| {
            split_row(line)
                .into_iter()
                .map(|text| Cell { text })
                .collect()
        })
        .collect();

    let consumed = 2 + rows.len();
    Some((Table { header, rows, align }, consumed))
}

/// Drop one leading and one trailing pipe, split on the rest, trim each cell.
fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn alignment(cell: &str) -> Alignment {
    match (cell.starts_with(':'), cell.ends_with(':')) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        (true, false) => Alignment::Left,
        (false, false) => Alignment::Unspecified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(cells: &[Cell]) -> Vec<&str> {
        cells.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn header_and_alignment() {
        let (table, consumed) = parse_table(&["a|b", "---|---:"]).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(texts(&table.header), ["a", "b"]);
        assert_eq!(table.align, [Alignment::Unspecified, Alignment::Right]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn all_alignments() {
        let lines = ["| l | c | r | n |", "|:--|:-:|--:|---|"];
        let (table, _) = parse_table(&lines).unwrap();
        assert_eq!(
            table.align,
            [
                Alignment::Left,
                Alignment::Center,
                Alignment::Right,
                Alignment::Unspecified
            ]
        );
    }

    #[test]
    fn rows_stop_at_first_line_without_pipe() {
        let lines = [
            "| A | B |",
            "|---|---|",
            "| 1 | 2 |",
            "| 3 | 4 |",
            "after",
            "| 5 | 6 |",
        ];
        let (table, consumed) = parse_table(&lines).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(texts(&table.rows[1]), ["3", "4"]);
    }

    #[test]
    fn row_width_is_not_reconciled() {
        let lines = ["a | b | c", "--|--|--", "1 | 2", "1 | 2 | 3 | 4"];
        let (table, _) = parse_table(&lines).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn align_follows_header_width() {
        let (table, _) = parse_table(&["a|b|c", "---:|---"]).unwrap();
        assert_eq!(
            table.align,
            [Alignment::Right, Alignment::Unspecified, Alignment::Unspecified]
        );
    }

    #[test]
    fn cells_keep_inline_markup() {
        let (table, _) = parse_table(&["| **bold** | `x` |", "|---|---|"]).unwrap();
        assert_eq!(table.header[0].text, "**bold**");
        assert!(table.header[0].segments()[0].bold);
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_table(&["a|b", "c|d"]).is_none());
        assert!(parse_table(&["a|b"]).is_none());
        assert!(parse_table(&[]).is_none());
    }
}
