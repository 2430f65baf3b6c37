//! Route table parsing logic.
//!
//! This module turns a routing table dump into a [`RouteTable`]:
//! - [`scanner`] - preamble skipping, noise filtering and line classification
//! - [`aggregate`] - route creation and path accumulation

mod aggregate;
mod scanner;

pub use aggregate::RouteAggregator;
pub use scanner::{ScanEvent, ScanState, Scanner};

use crate::dialect::Dialect;
use crate::error::ParseError;
use crate::models::RouteTable;

/// Parse lines of one dump in order.
pub fn parse_lines<'a, I>(lines: I, dialect: Dialect) -> Result<RouteTable, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let rules = dialect.rules();
    let mut scanner = Scanner::new(rules);
    let mut aggregator = RouteAggregator::new(rules.detail_protocol);

    for line in lines {
        if let Some(event) = scanner.scan_line(line)? {
            aggregator.apply(event, scanner.line_no())?;
        }
    }
    if scanner.state() == ScanState::Skipping {
        log::warn!(
            "No '{}' line found, no {} routes parsed",
            rules.start_marker,
            dialect
        );
    }

    let table = aggregator.finish();
    log::info!(
        "Parsed {} routes with {} paths",
        table.len(),
        table.path_count()
    );
    Ok(table)
}

/// Parse a whole dump.
pub fn parse_routes(text: &str, dialect: Dialect) -> Result<RouteTable, ParseError> {
    parse_lines(text.lines(), dialect)
}
