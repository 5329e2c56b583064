//! CBDC Tracker Report CLI
//!
//! Ingests CSV exports of CBDC project tracker data and payment-method
//! surveys, aggregates yearly status counts, and renders a table image,
//! a cumulative line chart, and pie charts as SVG files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use cbdc_tracker_report::commands::{execute_report, validate_args, ReportArgs};
use cbdc_tracker_report::output::read_report;
use cbdc_tracker_report::utils::config::{
    DEFAULT_CHART_WIDTH, DEFAULT_CUMULATIVE_MIN_YEAR, DEFAULT_TABLE_MIN_YEAR, SCHEMA_VERSION,
};

/// CBDC Tracker Report - yearly status aggregation and charts
#[derive(Parser, Debug)]
#[command(name = "cbdc-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate tracker data and render the report files
    Report {
        /// Path to the CBDC tracker CSV export
        #[arg(short, long, default_value = "Data/CBDCTracker.csv")]
        cbdc: PathBuf,

        /// Path to the point-of-sale payment survey CSV
        #[arg(long)]
        pos: Option<PathBuf>,

        /// Path to the e-commerce payment survey CSV
        #[arg(long)]
        ecom: Option<PathBuf>,

        /// Output directory for report files
        #[arg(short, long, default_value = "Out")]
        out: PathBuf,

        /// Minimum year shown in the table views
        #[arg(long, default_value_t = DEFAULT_TABLE_MIN_YEAR)]
        full_min_year: i32,

        /// Minimum year shown in the cumulative chart
        #[arg(long, default_value_t = DEFAULT_CUMULATIVE_MIN_YEAR)]
        cumulative_min_year: i32,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            cbdc,
            pos,
            ecom,
            out,
            full_min_year,
            cumulative_min_year,
            width,
            summary,
        } => {
            let args = ReportArgs {
                cbdc_data: cbdc,
                pos_data: pos,
                ecom_data: ecom,
                out_dir: out,
                table_min_year: full_min_year,
                cumulative_min_year,
                chart_width: width,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Records: {}", report.record_count);
    println!("  Years: {}", report.yearly.len());
    println!("  Unknown statuses: {}", report.unknown_status_count);

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("CBDC Tracker Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - Tracker export path");
        println!("  record_count: number       - Records retained after cleaning");
        println!("  dropped_missing: number    - Rows dropped for missing status/year");
        println!("  dropped_wholesale: number  - Rows dropped as Wholesale projects");
        println!("  unknown_status_count: number - Records outside the five categories");
        println!("  yearly: array              - Per-year status counts");
        println!("    year, cancelled, pilot, research, proof_of_concept, launched");
        println!("    net_active: number       - Active momentum (can be negative)");
        println!("  cumulative: array          - Running totals per status");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("CBDC Tracker Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Yearly status aggregation and chart generation for CBDC tracker data.");
}
