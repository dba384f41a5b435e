//! Plain aligned-table rendering.

use unicode_width::UnicodeWidthStr;

/// Render rows as a plain left-aligned table with a two-space gutter.
///
/// Column widths use display widths so wide characters align correctly.
/// No trailing padding after the last column, no trailing newline.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    lines.push(format_row(&header_cells, &widths));
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(cell.width());
            line.push_str(&" ".repeat(pad));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let rendered = render_table(
            &["id", "metric_key"],
            &[
                vec!["1".to_string(), "weight_kg".to_string()],
                vec!["12".to_string(), "hr".to_string()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "id  metric_key");
        assert_eq!(lines[1], "1   weight_kg");
        assert_eq!(lines[2], "12  hr");
    }

    #[test]
    fn last_column_has_no_trailing_padding() {
        let rendered = render_table(
            &["key", "value"],
            &[vec!["a".to_string(), "1".to_string()]],
        );
        for line in rendered.lines() {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn headers_only_when_no_rows() {
        let rendered = render_table(&["id", "date"], &[]);
        assert_eq!(rendered, "id  date");
    }
}
