//! CBDC Tracker Report
//!
//! Yearly status aggregation and SVG chart generation for CBDC
//! project tracker data and payment-method surveys.
//!
//! This crate provides the core implementation for the
//! `cbdc-report` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install cbdc-tracker-report
//! cbdc-report --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod utils;
