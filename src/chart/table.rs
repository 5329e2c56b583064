//! Status table rendered as an SVG image.

use super::ChartConfig;
use crate::aggregator::StatusTable;
use crate::utils::error::ChartError;
use log::info;

const ROW_HEIGHT: usize = 30;
const TITLE_HEIGHT: usize = 40;

/// Render a table view as an SVG grid image
///
/// **Public** - main entry point for table rendering
///
/// # Errors
/// * `ChartError::EmptyTable` - no rows to render
pub fn generate_table_image(
    table: &StatusTable,
    config: &ChartConfig,
) -> Result<String, ChartError> {
    if table.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    info!(
        "Generating table image: {} columns x {} rows",
        table.columns.len(),
        table.len()
    );

    let width = config.width;
    let cols = table.columns.len();
    let col_w = width as f64 / cols as f64;
    let title_offset = if config.title.is_empty() { 10 } else { TITLE_HEIGHT };
    let height = title_offset + (table.len() + 1) * ROW_HEIGHT + 10;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    ));
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);

    if !config.title.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{}" y="26" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
            width / 2,
            config.title
        ));
    }

    // Header row
    let header_y = title_offset;
    svg.push_str(&format!(
        r#"<rect x="0" y="{}" width="{}" height="{}" fill="rgb(230,230,230)" stroke="black"/>"#,
        header_y, width, ROW_HEIGHT
    ));
    for (col, label) in table.columns.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{}" font-size="13" text-anchor="middle" font-weight="bold">{}</text>"#,
            col as f64 * col_w + col_w / 2.0,
            header_y + ROW_HEIGHT / 2 + 5,
            label
        ));
    }

    // Data rows
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_y = header_y + (row_idx + 1) * ROW_HEIGHT;
        svg.push_str(&format!(
            r#"<rect x="0" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
            row_y, width, ROW_HEIGHT
        ));
        for (col, value) in row.iter().enumerate() {
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{}" font-size="13" text-anchor="middle">{}</text>"#,
                col as f64 * col_w + col_w / 2.0,
                row_y + ROW_HEIGHT / 2 + 5,
                value
            ));
        }
    }

    // Column separators
    for col in 1..cols {
        let cx = col as f64 * col_w;
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{}" x2="{:.1}" y2="{}" stroke="black"/>"#,
            cx,
            header_y,
            cx,
            header_y + (table.len() + 1) * ROW_HEIGHT
        ));
    }

    svg.push_str("</svg>");

    info!("Table image generated ({} bytes)", svg.len());
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_image_has_header_and_cells() {
        let table = StatusTable {
            columns: vec!["Year".to_string(), "Pilot".to_string()],
            rows: vec![vec![2019, 3], vec![2020, 5]],
        };

        let svg = generate_table_image(&table, &ChartConfig::new().with_title("Projects")).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">Year<"));
        assert!(svg.contains(">2020<"));
        assert!(svg.contains(">5<"));
        assert!(svg.contains("Projects"));
    }

    #[test]
    fn test_table_image_empty() {
        let table = StatusTable {
            columns: vec!["Year".to_string()],
            rows: vec![],
        };

        let result = generate_table_image(&table, &ChartConfig::new());
        assert!(matches!(result, Err(ChartError::EmptyTable)));
    }
}
