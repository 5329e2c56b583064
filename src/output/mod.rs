//! File output: SVG images and the JSON report.

pub mod json;
pub mod svg;

pub use json::{read_report, write_report};
pub use svg::write_svg;
