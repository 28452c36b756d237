//! Output module for crawl reports
//!
//! This module handles:
//! - Encoding a [`ResultSet`](crate::crawler::ResultSet) as CSV
//! - Writing the report to a file or stdout
//! - Summary statistics logged at the end of a run

mod csv_output;
pub mod stats;

pub use csv_output::{encode_csv, write_report, CSV_HEADER};
pub use stats::{log_statistics, ReportStatistics};
