//! Tracker export loading and cleaning.
//!
//! Loading reads the CSV as-is into `RawProject` rows; cleaning turns
//! those into the immutable record store the aggregator works on.
//! Cleaning never mutates its input.

use super::schema::{ProjectRecord, RawProject, Status};
use crate::utils::config::{STATUS_COLUMN_NAMES, YEAR_COLUMN_NAMES};
use crate::utils::error::DataLoadError;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// The cleaned record store, plus tallies of what cleaning removed.
///
/// `records` is ordered as in the source file and immutable for the
/// rest of the run; every aggregation call takes it by reference.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Retained project records, in file order
    pub records: Vec<ProjectRecord>,

    /// Rows dropped for missing (or unparseable) status or year
    pub dropped_missing: usize,

    /// Rows dropped as Wholesale projects
    pub dropped_wholesale: usize,

    /// Retained records whose status matched no known category
    pub unknown_status: u64,
}

/// Load tracker rows from a CSV export
///
/// # Errors
/// * `DataLoadError::MissingColumn` - no status or year column present
/// * `DataLoadError::Csv` - unreadable file or malformed CSV
pub fn load_projects(path: impl AsRef<Path>) -> Result<Vec<RawProject>, DataLoadError> {
    let path = path.as_ref();
    debug!("Loading tracker export from: {}", path.display());

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    require_column(&headers, STATUS_COLUMN_NAMES)?;
    require_column(&headers, YEAR_COLUMN_NAMES)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawProject>() {
        rows.push(result?);
    }

    debug!("Loaded {} raw rows", rows.len());
    Ok(rows)
}

/// Check that at least one accepted name for a required column is present
///
/// **Private** - internal validation shared with the payments loader
pub(super) fn require_column(
    headers: &StringRecord,
    accepted: &[&str],
) -> Result<(), DataLoadError> {
    if headers.iter().any(|h| accepted.contains(&h)) {
        Ok(())
    } else {
        Err(DataLoadError::MissingColumn(accepted[0].to_string()))
    }
}

/// Clean raw tracker rows into the record store
///
/// Drops rows missing status or year, drops Wholesale projects, and
/// normalizes the mixed "Retail,Wholesale" category to "Retail".
/// Records with an unrecognized status string are retained (they still
/// count toward the years present in the data) but tallied and logged,
/// since the aggregator will exclude them from every status count.
pub fn clean(rows: &[RawProject]) -> Dataset {
    let mut records = Vec::new();
    let mut dropped_missing = 0;
    let mut dropped_wholesale = 0;
    let mut unknown: BTreeMap<String, u64> = BTreeMap::new();

    for row in rows {
        let status = match non_empty(row.status.as_deref()) {
            Some(s) => s,
            None => {
                dropped_missing += 1;
                continue;
            }
        };

        let year = match non_empty(row.year.as_deref()).and_then(parse_year) {
            Some(y) => y,
            None => {
                dropped_missing += 1;
                continue;
            }
        };

        let project_type = non_empty(row.project_type.as_deref()).unwrap_or("");
        if project_type == "Wholesale" {
            dropped_wholesale += 1;
            continue;
        }
        let project_type = if project_type == "Retail,Wholesale" {
            "Retail"
        } else {
            project_type
        };

        if Status::from_data_label(status).is_none() {
            *unknown.entry(status.to_string()).or_insert(0) += 1;
        }

        records.push(ProjectRecord {
            name: non_empty(row.name.as_deref()).unwrap_or("").to_string(),
            year,
            status: status.to_string(),
            project_type: project_type.to_string(),
        });
    }

    for (label, count) in &unknown {
        warn!(
            "Unrecognized status \"{}\" on {} record(s); excluded from status counts",
            label, count
        );
    }

    debug!(
        "Cleaned dataset: {} records kept, {} dropped missing, {} dropped wholesale",
        records.len(),
        dropped_missing,
        dropped_wholesale
    );

    Dataset {
        records,
        dropped_missing,
        dropped_wholesale,
        unknown_status: unknown.values().sum(),
    }
}

/// Trim and filter out empty / missing cell values
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse an announcement year, tolerating spreadsheet float formatting
/// ("2020.0") alongside plain integers
fn parse_year(value: &str) -> Option<i32> {
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i32),
        _ => None,
    }
}
