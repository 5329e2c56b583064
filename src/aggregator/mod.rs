//! Aggregation core: yearly status counts and presentation views.

pub mod views;
pub mod yearly;

pub use views::{cumulative_view, full_view, short_view, StatusTable};
pub use yearly::{aggregate, aggregate_cumulative, count_unrecognized, CumulativeCounts, YearlyCounts};
