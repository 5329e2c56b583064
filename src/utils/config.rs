//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default minimum year shown in the full/short table views.
/// The tracker has meaningful coverage only from 2014 onward.
pub const DEFAULT_TABLE_MIN_YEAR: i32 = 2013;

/// Default minimum year shown in the cumulative line chart
pub const DEFAULT_CUMULATIVE_MIN_YEAR: i32 = 2005;

/// Default chart width in pixels
pub const DEFAULT_CHART_WIDTH: usize = 1200;

// Column names accepted for the tracker export
// (different exports use the raw tracker headers or normalized names)
pub const STATUS_COLUMN_NAMES: &[&str] = &["Status", "status"];
pub const YEAR_COLUMN_NAMES: &[&str] = &["Announcement Year", "year"];
pub const METHOD_COLUMN_NAMES: &[&str] = &["Means of Payment", "method"];
pub const PERCENTAGE_COLUMN_NAMES: &[&str] = &["Percentage", "percentage"];

/// Grayscale palette for chart series and pie slices, excluding black
/// so strokes and labels stay readable. One entry per status category.
pub const GRAYSCALE_PALETTE: &[&str] = &[
    "rgb(179,179,179)",
    "rgb(128,128,128)",
    "rgb(77,77,77)",
    "rgb(230,230,230)",
    "rgb(153,153,153)",
];
