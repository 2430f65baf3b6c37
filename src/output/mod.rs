//! Output formatting for route tables.
//!
//! This module handles formatting and outputting the parsed routes:
//! - [`csv`] - CSV report export
//! - [`terminal`] - Banner and summary with colors

mod csv;
mod terminal;

pub use self::csv::{
    export_to_file, report_rows, write_report, ReportRow, QUOTE_CHAR, REPORT_HEADER,
};
pub use terminal::{format_field, print_summary, protocol_counts, write_banner};
