//! Cumulative status counts as an SVG line chart.
//!
//! One polyline per status column, grayscale strokes, dashed lines for
//! the Proof of Concept and Launched series so they stay readable in
//! print.

use super::ChartConfig;
use crate::aggregator::StatusTable;
use crate::utils::config::GRAYSCALE_PALETTE;
use crate::utils::error::ChartError;
use log::info;

const CHART_HEIGHT: usize = 600;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Series drawn dashed to distinguish them in grayscale print
const DASHED_SERIES: &[&str] = &["Proof of Concept", "Launched"];

/// Generate an SVG line chart from a year-keyed table
///
/// **Public** - main entry point for line chart rendering
///
/// The first table column must be the year; every other column becomes
/// one series.
///
/// # Errors
/// * `ChartError::EmptyTable` - no rows to plot
pub fn generate_line_chart(
    table: &StatusTable,
    config: &ChartConfig,
) -> Result<String, ChartError> {
    if table.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    info!(
        "Generating line chart with {} series over {} years",
        table.columns.len() - 1,
        table.len()
    );

    let width = config.width as f64;
    let height = CHART_HEIGHT as f64;
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;

    let min_year = table.rows.first().map(|r| r[0]).unwrap_or(0);
    let max_year = table.rows.last().map(|r| r[0]).unwrap_or(0);
    let year_span = (max_year - min_year).max(1) as f64;

    let max_value = table
        .rows
        .iter()
        .flat_map(|row| row[1..].iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let x = |year: i64| MARGIN_LEFT + ((year - min_year) as f64 / year_span) * plot_w;
    let y = |value: i64| MARGIN_TOP + plot_h - (value as f64 / max_value) * plot_h;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, CHART_HEIGHT, config.width, CHART_HEIGHT
    ));
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);

    if !config.title.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{:.0}" y="28" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
            width / 2.0,
            config.title
        ));
    }

    // Axes
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
        MARGIN_LEFT,
        MARGIN_TOP + plot_h,
        MARGIN_LEFT + plot_w,
        MARGIN_TOP + plot_h
    ));
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
        MARGIN_LEFT,
        MARGIN_TOP,
        MARGIN_LEFT,
        MARGIN_TOP + plot_h
    ));

    // Y ticks (five evenly spaced)
    for i in 0..=5 {
        let value = (max_value * i as f64 / 5.0).round() as i64;
        let ty = y(value);
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
            MARGIN_LEFT - 5.0,
            ty,
            MARGIN_LEFT,
            ty
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 9.0,
            ty + 4.0,
            value
        ));
    }

    // X ticks, thinned when many years are shown
    let year_count = (max_year - min_year + 1) as usize;
    let stride = if year_count > 20 { 2 } else { 1 };
    let mut year = min_year;
    while year <= max_year {
        let tx = x(year);
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
            tx,
            MARGIN_TOP + plot_h,
            tx,
            MARGIN_TOP + plot_h + 5.0
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">{}</text>"#,
            tx,
            MARGIN_TOP + plot_h + 20.0,
            year
        ));
        year += stride;
    }

    // Axis labels
    svg.push_str(&format!(
        r#"<text x="{:.0}" y="{:.0}" font-size="14" text-anchor="middle">Year</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        height - 12.0
    ));
    svg.push_str(&format!(
        r#"<text x="18" y="{:.0}" font-size="14" text-anchor="middle" transform="rotate(-90 18 {:.0})">Number of Projects</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    ));

    // Series polylines
    for (series, label) in table.columns[1..].iter().enumerate() {
        let color = GRAYSCALE_PALETTE[series % GRAYSCALE_PALETTE.len()];
        let dash = if DASHED_SERIES.contains(&label.as_str()) {
            r#" stroke-dasharray="6,4""#
        } else {
            ""
        };

        let points: Vec<String> = table
            .rows
            .iter()
            .map(|row| format!("{:.1},{:.1}", x(row[0]), y(row[series + 1])))
            .collect();

        svg.push_str(&format!(
            r#"<polyline fill="none" stroke="{}" stroke-width="2"{} points="{}"/>"#,
            color,
            dash,
            points.join(" ")
        ));
    }

    render_legend(&mut svg, table);

    svg.push_str("</svg>");

    info!("Line chart generated ({} bytes)", svg.len());
    Ok(svg)
}

fn render_legend(out: &mut String, table: &StatusTable) {
    let x0 = MARGIN_LEFT + 14.0;
    let y0 = MARGIN_TOP + 14.0;

    for (series, label) in table.columns[1..].iter().enumerate() {
        let color = GRAYSCALE_PALETTE[series % GRAYSCALE_PALETTE.len()];
        let dash = if DASHED_SERIES.contains(&label.as_str()) {
            r#" stroke-dasharray="6,4""#
        } else {
            ""
        };
        let ly = y0 + series as f64 * 18.0;

        out.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"{}/>"#,
            x0,
            ly,
            x0 + 26.0,
            ly,
            color,
            dash
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12">{}</text>"#,
            x0 + 32.0,
            ly + 4.0,
            label
        ));
    }
}
