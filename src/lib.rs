// cargo watch -x 'fmt' -x 'test'

pub mod config;
pub mod dialect;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;
use std::path::Path;

pub use dialect::Dialect;
pub use error::{ExportError, ParseError};
pub use models::{host_range, HostRange, Route, RouteTable};
pub use output::{report_rows, ReportRow};
pub use processing::parse_routes;

/// Outcome of one parse-and-export pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub routes: usize,
    pub paths: usize,
    /// False when the report could not be written.
    pub exported: bool,
}

/// Parse `input` as `dialect` and write the report to `output`.
///
/// Malformed input and an unreadable `input` are errors. A failed write is
/// reported on the terminal and in `RunSummary::exported`, the table is kept.
pub fn run_files(
    dialect: Dialect,
    input: &Path,
    output: &Path,
) -> Result<RunSummary, Box<dyn Error>> {
    log::info!("#Start run_files() {} {}", dialect, input.display());
    let text = std::fs::read_to_string(input)
        .map_err(|e| format!("Error reading {}: {e}", input.display()))?;
    let table = parse_routes(&text, dialect)?;

    let exported = match output::export_to_file(&table, output) {
        Ok(rows) => {
            log::info!("Wrote {rows} rows");
            println!("  -- Output saved to '{}'", output.display());
            true
        }
        Err(e) => {
            log::error!("{e}");
            println!(
                "  -- Unable to write to {}, if the file is already open close it.",
                output.display()
            );
            false
        }
    };
    output::print_summary(&table);

    Ok(RunSummary {
        routes: table.len(),
        paths: table.path_count(),
        exported,
    })
}

/// Entry point shared by the binaries: banner, then `routes.txt` to `routes.csv`.
pub fn run(dialect: Dialect) -> Result<RunSummary, Box<dyn Error>> {
    output::write_banner(dialect);
    run_files(
        dialect,
        Path::new(config::INPUT_FILE),
        Path::new(config::OUTPUT_FILE),
    )
}
