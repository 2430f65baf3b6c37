//! CSV report of a route table, one row per path.

use crate::error::ExportError;
use crate::models::{host_range, RouteTable};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row of the report.
pub const REPORT_HEADER: [&str; 8] = [
    "Route",
    "Protocol",
    "Metric",
    "Next Hop",
    "Age",
    "Interface",
    "From Range",
    "To Range",
];

/// Quote character used when a field needs quoting.
pub const QUOTE_CHAR: u8 = b'|';

/// One flattened report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub route: String,
    pub protocol: String,
    pub metric: String,
    pub next_hop: String,
    pub age: String,
    pub interface: String,
    pub from_range: String,
    pub to_range: String,
}

/// Flatten the table in prefix order, paths in discovery order.
pub fn report_rows(table: &RouteTable) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(table.path_count());
    for route in table.iter() {
        let range = host_range(&route.prefix);
        for path in &route.paths {
            rows.push(ReportRow {
                route: route.prefix.clone(),
                protocol: path.protocol_label.clone(),
                metric: path.metric.clone(),
                next_hop: path.next_hop.clone(),
                age: path.age.clone(),
                interface: path.interface.clone(),
                from_range: range.first.clone(),
                to_range: range.last.clone(),
            });
        }
    }
    rows
}

/// Write header and rows to `writer`.
pub fn write_report<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b',')
        .quote(QUOTE_CHAR)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(REPORT_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the report for `table` to `path`, returning the number of rows.
pub fn export_to_file(table: &RouteTable, path: &Path) -> Result<usize, ExportError> {
    let rows = report_rows(table);
    log::info!("Writing {} rows to {}", rows.len(), path.display());

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_report(&rows, file).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(rows.len())
}
