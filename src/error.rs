//! Error types for parsing and exporting route tables.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed input found while scanning a routing table dump.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line_no}: path detail before any route header: '{line}'")]
    OrphanDetail { line_no: usize, line: String },

    #[error("line {line_no}: path detail for unknown route {prefix}")]
    UnknownRoute { line_no: usize, prefix: String },
}

/// Failure writing the CSV report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unable to write {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unable to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orphan_detail_message_names_line() {
        let err = ParseError::OrphanDetail {
            line_no: 3,
            line: "[110/2] via 10.0.0.5, 00:00:12, Gi0/1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("line 3:"), "{msg}");
        assert!(msg.contains("via 10.0.0.5"), "{msg}");
    }
}
