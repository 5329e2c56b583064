//! Boxed text summary of a status table for stdout.

use crate::aggregator::StatusTable;

/// Render a table view as a box-drawn text table
///
/// **Public** - used by the report command for `--summary`
pub fn generate_text_summary(table: &StatusTable) -> String {
    if table.is_empty() {
        return "  (no rows)".to_string();
    }

    // Column widths: wide enough for the label and the widest value
    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(col, label)| {
            let value_width = table
                .rows
                .iter()
                .map(|row| row[col].to_string().len())
                .max()
                .unwrap_or(0);
            label.len().max(value_width).max(4)
        })
        .collect();

    let mut lines = Vec::new();
    lines.push(border(&widths, "┏", "┳", "┓"));

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(label, w)| format!(" {:^w$} ", label, w = w))
        .collect();
    lines.push(format!("  ┃{}┃", header.join("┃")));
    lines.push(border(&widths, "┣", "╋", "┫"));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, w)| format!(" {:>w$} ", value, w = w))
            .collect();
        lines.push(format!("  ┃{}┃", cells.join("┃")));
    }

    lines.push(border(&widths, "┗", "┻", "┛"));
    lines.join("\n")
}

fn border(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "━".repeat(w + 2)).collect();
    format!("  {}{}{}", left, segments.join(mid), right)
}
