//! JSON report writer and reader.

use super::svg::{ensure_parent_dirs, validate_output_path};
use crate::dataset::schema::Report;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a report to a JSON file with pretty formatting
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;
    ensure_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!("Report written successfully");
    Ok(())
}

/// Read a report back from a JSON file
///
/// **Public** - used by the validate command and tests
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: Report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} records",
        report.version, report.record_count
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::YearlyCounts;
    use crate::utils::config::SCHEMA_VERSION;
    use tempfile::NamedTempFile;

    fn create_test_report() -> Report {
        Report {
            version: SCHEMA_VERSION.to_string(),
            source: "tracker.csv".to_string(),
            record_count: 2,
            dropped_missing: 1,
            dropped_wholesale: 0,
            unknown_status_count: 0,
            yearly: vec![YearlyCounts {
                year: 2020,
                cancelled: 0,
                pilot: 1,
                research: 1,
                proof_of_concept: 0,
                launched: 0,
                net_active: 2,
            }],
            cumulative: vec![],
            generated_at: "2023-02-05T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&report, path).unwrap();
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.record_count, report.record_count);
        assert_eq!(loaded.yearly, report.yearly);
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/out/report.json");

        write_report(&create_test_report(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_report_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_report(&create_test_report(), temp_dir.path());
        assert!(result.is_err());
    }
}
