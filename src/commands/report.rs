//! Report command implementation.
//!
//! The report command:
//! 1. Loads and cleans the tracker export
//! 2. Aggregates yearly and cumulative status counts
//! 3. Shapes the presentation views
//! 4. Renders the table image and line chart
//! 5. Loads the payment surveys and renders the pies (if provided)
//! 6. Writes output files

use crate::aggregator::{
    aggregate, aggregate_cumulative, cumulative_view, full_view, short_view,
};
use crate::chart::{
    generate_line_chart, generate_pie_charts, generate_table_image, generate_text_summary,
    ChartConfig,
};
use crate::dataset::{clean, load_payment_shares, load_projects, Report};
use crate::output::{write_report, write_svg};
use crate::utils::config::{
    DEFAULT_CHART_WIDTH, DEFAULT_CUMULATIVE_MIN_YEAR, DEFAULT_TABLE_MIN_YEAR, SCHEMA_VERSION,
};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Output file names inside the output directory
const REPORT_FILE: &str = "report.json";
const TABLE_FILE: &str = "status_table.svg";
const LINE_CHART_FILE: &str = "cumulative_chart.svg";
const PIE_CHART_FILE: &str = "payment_pies.svg";

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the CBDC tracker CSV export
    pub cbdc_data: PathBuf,

    /// Path to the point-of-sale payment survey CSV (optional)
    pub pos_data: Option<PathBuf>,

    /// Path to the e-commerce payment survey CSV (optional)
    pub ecom_data: Option<PathBuf>,

    /// Output directory for report files
    pub out_dir: PathBuf,

    /// Minimum year shown in the table views
    pub table_min_year: i32,

    /// Minimum year shown in the cumulative chart
    pub cumulative_min_year: i32,

    /// Chart width in pixels
    pub chart_width: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            cbdc_data: PathBuf::from("Data/CBDCTracker.csv"),
            pos_data: None,
            ecom_data: None,
            out_dir: PathBuf::from("Out"),
            table_min_year: DEFAULT_TABLE_MIN_YEAR,
            cumulative_min_year: DEFAULT_CUMULATIVE_MIN_YEAR,
            chart_width: DEFAULT_CHART_WIDTH,
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Data loading failures (missing columns, malformed CSV)
/// * Chart generation on empty views
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting report for: {}", args.cbdc_data.display());

    // Step 1: Load and clean the tracker export
    info!("Step 1/6: Loading tracker data...");
    let rows = load_projects(&args.cbdc_data).context("Failed to load tracker export")?;
    let dataset = clean(&rows);

    debug!(
        "Dataset: {} records, {} dropped missing, {} dropped wholesale, {} unknown statuses",
        dataset.records.len(),
        dataset.dropped_missing,
        dataset.dropped_wholesale,
        dataset.unknown_status
    );

    // Step 2: Aggregate
    info!("Step 2/6: Aggregating yearly status counts...");
    let yearly = aggregate(&dataset.records);
    let cumulative = aggregate_cumulative(&dataset.records);

    info!(
        "Aggregated {} distinct years from {} records",
        yearly.len(),
        dataset.records.len()
    );

    // Step 3: Shape views
    info!("Step 3/6: Shaping presentation views...");
    let table = short_view(&yearly, args.table_min_year);
    let chart = cumulative_view(&cumulative, args.cumulative_min_year);

    // Step 4: Render table image and line chart
    info!("Step 4/6: Rendering table image and line chart...");
    let table_svg = generate_table_image(
        &table,
        &ChartConfig::new()
            .with_title("CBDC Projects by Status and Year")
            .with_width(args.chart_width),
    )
    .context("Failed to render table image")?;

    let chart_svg = generate_line_chart(
        &chart,
        &ChartConfig::new()
            .with_title("Cumulative CBDC Projects by Status")
            .with_width(args.chart_width),
    )
    .context("Failed to render cumulative line chart")?;

    // Step 5: Payment surveys (optional pair)
    let pies_svg = match (&args.pos_data, &args.ecom_data) {
        (Some(pos_path), Some(ecom_path)) => {
            info!("Step 5/6: Rendering payment-method pie charts...");
            let pos = load_payment_shares(pos_path).context("Failed to load POS survey")?;
            let ecom = load_payment_shares(ecom_path).context("Failed to load e-commerce survey")?;
            Some(generate_pie_charts(&pos, &ecom).context("Failed to render pie charts")?)
        }
        _ => {
            info!("Step 5/6: Skipping pie charts (no payment surveys given)");
            None
        }
    };

    // Step 6: Write outputs
    info!("Step 6/6: Writing output files...");

    let report = Report {
        version: SCHEMA_VERSION.to_string(),
        source: args.cbdc_data.display().to_string(),
        record_count: dataset.records.len(),
        dropped_missing: dataset.dropped_missing,
        dropped_wholesale: dataset.dropped_wholesale,
        unknown_status_count: dataset.unknown_status,
        yearly: yearly.clone(),
        cumulative,
        generated_at: Utc::now().to_rfc3339(),
    };

    write_report(&report, args.out_dir.join(REPORT_FILE))
        .context("Failed to write JSON report")?;
    info!("✓ Report written to: {}", args.out_dir.join(REPORT_FILE).display());

    write_svg(&table_svg, args.out_dir.join(TABLE_FILE))
        .context("Failed to write table image")?;
    info!("✓ Table image written to: {}", args.out_dir.join(TABLE_FILE).display());

    write_svg(&chart_svg, args.out_dir.join(LINE_CHART_FILE))
        .context("Failed to write cumulative chart")?;
    info!(
        "✓ Cumulative chart written to: {}",
        args.out_dir.join(LINE_CHART_FILE).display()
    );

    if let Some(svg) = pies_svg {
        write_svg(&svg, args.out_dir.join(PIE_CHART_FILE))
            .context("Failed to write pie charts")?;
        info!(
            "✓ Pie charts written to: {}",
            args.out_dir.join(PIE_CHART_FILE).display()
        );
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CBDC PROJECT STATUS SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source:          {}", args.cbdc_data.display());
        println!("Records kept:    {}", report.record_count);
        println!("Dropped missing: {}", report.dropped_missing);
        println!("Dropped wholesale: {}", report.dropped_wholesale);
        println!("Unknown status:  {}", report.unknown_status_count);
        println!("\n{}", generate_text_summary(&full_view(&yearly, args.table_min_year)));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.cbdc_data.as_os_str().is_empty() {
        anyhow::bail!("Tracker data path cannot be empty");
    }

    for (name, year) in [
        ("--full-min-year", args.table_min_year),
        ("--cumulative-min-year", args.cumulative_min_year),
    ] {
        if !(1900..=2100).contains(&year) {
            anyhow::bail!("{} must be between 1900 and 2100 (got {})", name, year);
        }
    }

    if args.chart_width == 0 {
        anyhow::bail!("Chart width must be greater than 0");
    }

    if args.chart_width > 10_000 {
        anyhow::bail!("Chart width is too large (max 10000)");
    }

    if args.pos_data.is_some() != args.ecom_data.is_some() {
        anyhow::bail!("--pos and --ecom must be given together");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = ReportArgs::default();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_path() {
        let args = ReportArgs {
            cbdc_data: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_min_year_out_of_range() {
        let args = ReportArgs {
            table_min_year: 1776,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_width_zero() {
        let args = ReportArgs {
            chart_width: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_width_too_large() {
        let args = ReportArgs {
            chart_width: 20_000,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_unpaired_surveys() {
        let args = ReportArgs {
            pos_data: Some(PathBuf::from("pos.csv")),
            ecom_data: None,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
