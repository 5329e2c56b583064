//! Presentation views over aggregator output.
//!
//! Views are pure, order-preserving projections: they select and name
//! columns and apply a caller-supplied minimum-year floor, but never
//! alter counts. The floors the CLI defaults to (2013 for the tables,
//! 2005 for the cumulative chart) are presentation tuning, not part of
//! the aggregation contract.

use super::yearly::{CumulativeCounts, YearlyCounts};
use crate::dataset::schema::Status;

/// A presentation-ready table: column labels plus numeric rows.
///
/// The first column is always the year. Values are signed because the
/// full view carries `net_active`, which can be negative.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<i64>>,
}

impl StatusTable {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn status_columns() -> Vec<String> {
    Status::ALL
        .iter()
        .map(|s| s.display_label().to_string())
        .collect()
}

/// Full view: year, net active, and the five per-year status counts
pub fn full_view(yearly: &[YearlyCounts], min_year: i32) -> StatusTable {
    let mut columns = vec!["Year".to_string(), "Net Active".to_string()];
    columns.extend(status_columns());

    let rows = yearly
        .iter()
        .filter(|y| y.year >= min_year)
        .map(|y| {
            let mut row = vec![y.year as i64, y.net_active];
            row.extend(Status::ALL.iter().map(|s| y.count_for(*s) as i64));
            row
        })
        .collect();

    StatusTable { columns, rows }
}

/// Short view: year and the five per-year status counts
pub fn short_view(yearly: &[YearlyCounts], min_year: i32) -> StatusTable {
    let mut columns = vec!["Year".to_string()];
    columns.extend(status_columns());

    let rows = yearly
        .iter()
        .filter(|y| y.year >= min_year)
        .map(|y| {
            let mut row = vec![y.year as i64];
            row.extend(Status::ALL.iter().map(|s| y.count_for(*s) as i64));
            row
        })
        .collect();

    StatusTable { columns, rows }
}

/// Cumulative view: year and the five running status totals
pub fn cumulative_view(cumulative: &[CumulativeCounts], min_year: i32) -> StatusTable {
    let mut columns = vec!["Year".to_string()];
    columns.extend(status_columns());

    let rows = cumulative
        .iter()
        .filter(|c| c.year >= min_year)
        .map(|c| {
            let mut row = vec![c.year as i64];
            row.extend(Status::ALL.iter().map(|s| c.count_for(*s) as i64));
            row
        })
        .collect();

    StatusTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::yearly::{aggregate, aggregate_cumulative};
    use crate::dataset::schema::ProjectRecord;
    use pretty_assertions::assert_eq;

    fn record(year: i32, status: &str) -> ProjectRecord {
        ProjectRecord {
            name: String::new(),
            year,
            status: status.to_string(),
            project_type: "Retail".to_string(),
        }
    }

    fn sample_yearly() -> Vec<YearlyCounts> {
        aggregate(&[
            record(2012, "Research"),
            record(2014, "Pilot"),
            record(2014, "Cancelled"),
            record(2016, "Launched"),
        ])
    }

    #[test]
    fn test_full_view_columns_and_floor() {
        let table = full_view(&sample_yearly(), 2013);

        assert_eq!(
            table.columns,
            vec![
                "Year",
                "Net Active",
                "Cancelled",
                "Pilot",
                "Research",
                "Proof of Concept",
                "Launched"
            ]
        );
        // 2012 falls below the floor
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], vec![2014, 0, 1, 1, 0, 0, 0]);
        assert_eq!(table.rows[1], vec![2016, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_short_view_drops_net_active() {
        let table = short_view(&sample_yearly(), 2000);

        assert_eq!(table.columns.len(), 6);
        assert!(!table.columns.contains(&"Net Active".to_string()));
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0], vec![2012, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_cumulative_view_preserves_running_totals() {
        let cumulative = aggregate_cumulative(&[
            record(2012, "Research"),
            record(2014, "Research"),
            record(2016, "Launched"),
        ]);

        let table = cumulative_view(&cumulative, 2014);

        assert_eq!(table.len(), 2);
        // Research column keeps totals accumulated before the floor
        assert_eq!(table.rows[0], vec![2014, 0, 0, 2, 0, 0]);
        assert_eq!(table.rows[1], vec![2016, 0, 0, 2, 0, 1]);
    }

    #[test]
    fn test_views_on_empty_input() {
        assert!(full_view(&[], 2013).is_empty());
        assert!(short_view(&[], 2013).is_empty());
        assert!(cumulative_view(&[], 2005).is_empty());
    }
}
