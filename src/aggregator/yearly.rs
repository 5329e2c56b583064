//! Yearly status aggregation over the record store.
//!
//! Both operations are pure functions over an immutable snapshot:
//! nothing is cached between calls and calling them twice on the same
//! records yields identical results.

use crate::dataset::schema::{ProjectRecord, Status};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status counts for a single announcement year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyCounts {
    pub year: i32,
    pub cancelled: u64,
    pub pilot: u64,
    pub research: u64,
    pub proof_of_concept: u64,
    pub launched: u64,

    /// Active-project momentum: pilot + research + proof of concept
    /// + launched - cancelled. Negative when cancellations dominate.
    pub net_active: i64,
}

impl YearlyCounts {
    /// Count for one status category
    pub fn count_for(&self, status: Status) -> u64 {
        match status {
            Status::Cancelled => self.cancelled,
            Status::Pilot => self.pilot,
            Status::Research => self.research,
            Status::ProofOfConcept => self.proof_of_concept,
            Status::Launched => self.launched,
        }
    }
}

/// Running status totals up to and including a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeCounts {
    pub year: i32,
    pub cancelled: u64,
    pub pilot: u64,
    pub research: u64,
    pub proof_of_concept: u64,
    pub launched: u64,
}

impl CumulativeCounts {
    /// Running total for one status category
    pub fn count_for(&self, status: Status) -> u64 {
        match status {
            Status::Cancelled => self.cancelled,
            Status::Pilot => self.pilot,
            Status::Research => self.research,
            Status::ProofOfConcept => self.proof_of_concept,
            Status::Launched => self.launched,
        }
    }
}

/// Aggregate per-year status counts
///
/// **Public** - main entry point for aggregation
///
/// Returns one entry per distinct year present in the records, sorted
/// ascending, with no gap years inserted. Statuses are matched exactly
/// against the five known category strings; records with any other
/// status still make their year appear but contribute to no count.
/// Empty input yields an empty vector.
pub fn aggregate(records: &[ProjectRecord]) -> Vec<YearlyCounts> {
    debug!("Aggregating {} records by year", records.len());

    // year -> tally per status, ordered ascending by the map itself
    let mut by_year: BTreeMap<i32, [u64; 5]> = BTreeMap::new();

    for record in records {
        let tally = by_year.entry(record.year).or_insert([0; 5]);
        if let Some(status) = Status::from_data_label(&record.status) {
            tally[status.index()] += 1;
        }
    }

    let yearly: Vec<YearlyCounts> = by_year
        .into_iter()
        .map(|(year, tally)| {
            let [cancelled, pilot, research, proof_of_concept, launched] = tally;
            YearlyCounts {
                year,
                cancelled,
                pilot,
                research,
                proof_of_concept,
                launched,
                net_active: (pilot + research + proof_of_concept + launched) as i64
                    - cancelled as i64,
            }
        })
        .collect();

    debug!("Aggregated {} distinct years", yearly.len());
    yearly
}

/// Aggregate running status totals per year
///
/// **Public** - reuses [`aggregate`] and folds each status count as a
/// running sum. The fold runs in year-ascending order; the per-status
/// totals are monotonically non-decreasing as year increases.
pub fn aggregate_cumulative(records: &[ProjectRecord]) -> Vec<CumulativeCounts> {
    let mut running = [0u64; 5];

    aggregate(records)
        .iter()
        .map(|counts| {
            for status in Status::ALL {
                running[status.index()] += counts.count_for(status);
            }
            CumulativeCounts {
                year: counts.year,
                cancelled: running[0],
                pilot: running[1],
                research: running[2],
                proof_of_concept: running[3],
                launched: running[4],
            }
        })
        .collect()
}

/// Count records whose status matches no known category
///
/// **Public** - surfaces what the status counts silently exclude
pub fn count_unrecognized(records: &[ProjectRecord]) -> u64 {
    records
        .iter()
        .filter(|r| Status::from_data_label(&r.status).is_none())
        .count() as u64
}
