//! Record and report schema definitions.
//!
//! `RawProject` mirrors one row of the tracker export as it appears on
//! disk; `ProjectRecord` is the cleaned, immutable form the aggregator
//! consumes. `Report` is the structure written to JSON, versioned to
//! allow future evolution.

use crate::aggregator::{CumulativeCounts, YearlyCounts};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a CBDC project.
///
/// The tracker export uses exactly these strings (note the lowercase
/// "concept"); matching is exact and case-sensitive. Anything else is
/// treated as unrecognized and excluded from the status counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Cancelled,
    Pilot,
    Research,
    ProofOfConcept,
    Launched,
}

impl Status {
    /// All categories, in the order they appear in tables and legends
    pub const ALL: [Status; 5] = [
        Status::Cancelled,
        Status::Pilot,
        Status::Research,
        Status::ProofOfConcept,
        Status::Launched,
    ];

    /// Parse the exact data value from the tracker export
    pub fn from_data_label(label: &str) -> Option<Status> {
        match label {
            "Cancelled" => Some(Status::Cancelled),
            "Pilot" => Some(Status::Pilot),
            "Research" => Some(Status::Research),
            "Proof of concept" => Some(Status::ProofOfConcept),
            "Launched" => Some(Status::Launched),
            _ => None,
        }
    }

    /// The value as it appears in the data
    pub fn data_label(&self) -> &'static str {
        match self {
            Status::Cancelled => "Cancelled",
            Status::Pilot => "Pilot",
            Status::Research => "Research",
            Status::ProofOfConcept => "Proof of concept",
            Status::Launched => "Launched",
        }
    }

    /// Column/legend label for presentation
    pub fn display_label(&self) -> &'static str {
        match self {
            Status::ProofOfConcept => "Proof of Concept",
            other => other.data_label(),
        }
    }

    /// Position within [`Status::ALL`], used for tally arrays
    pub fn index(&self) -> usize {
        match self {
            Status::Cancelled => 0,
            Status::Pilot => 1,
            Status::Research => 2,
            Status::ProofOfConcept => 3,
            Status::Launched => 4,
        }
    }
}

/// One row of the tracker CSV, as exported.
///
/// Field aliases accept both the tracker's raw headers and the
/// normalized short names, the same way different exports name them.
/// Everything is optional at this stage; `clean` decides what to keep.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProject {
    /// Project / digital currency name
    #[serde(default, alias = "Digital currency")]
    pub name: Option<String>,

    /// Announcement year (kept as text; exports sometimes carry "2020.0")
    #[serde(default, alias = "Announcement Year")]
    pub year: Option<String>,

    /// Lifecycle status string
    #[serde(default, alias = "Status")]
    pub status: Option<String>,

    /// Retail / Wholesale / "Retail,Wholesale"
    #[serde(default, rename = "type", alias = "Retail/Wholesale")]
    pub project_type: Option<String>,
}

/// A cleaned, immutable CBDC project record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Project name
    pub name: String,

    /// Announcement year
    pub year: i32,

    /// Status string, exact as in the data (may be unrecognized)
    pub status: String,

    /// Project type after normalization ("Retail,Wholesale" becomes "Retail")
    pub project_type: String,
}

/// One row of a payment-method survey (POS or e-commerce)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentShare {
    /// Payment method name
    #[serde(alias = "Means of Payment")]
    pub method: String,

    /// Share of transactions, in percent
    #[serde(alias = "Percentage")]
    pub percentage: f64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Path of the tracker export this report was built from
    pub source: String,

    /// Number of records retained after cleaning
    pub record_count: usize,

    /// Rows dropped for missing status or year
    pub dropped_missing: usize,

    /// Rows dropped as Wholesale projects
    pub dropped_wholesale: usize,

    /// Retained records whose status matched no known category
    pub unknown_status_count: u64,

    /// Per-year status counts, ascending by year
    pub yearly: Vec<YearlyCounts>,

    /// Running totals per status, ascending by year
    pub cumulative: Vec<CumulativeCounts>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
