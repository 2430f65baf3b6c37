//! Terminal output utilities.
//!
//! Startup banner and the end of run summary.

use crate::dialect::Dialect;
use crate::models::{protocol_name, RouteTable};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the parser name and version.
pub fn write_banner(dialect: Dialect) {
    println!(
        "{} Route Parser version: '{}'  ({})",
        dialect,
        env!("CARGO_PKG_VERSION").green(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}

/// Path count per protocol label, most frequent first, ties by label.
pub fn protocol_counts(table: &RouteTable) -> Vec<(String, usize)> {
    table
        .iter()
        .flat_map(|r| r.paths.iter().map(|p| p.protocol_label.clone()))
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

/// Print route, path and per-protocol totals.
pub fn print_summary(table: &RouteTable) {
    let ecmp_routes = table.iter().filter(|r| r.is_ecmp()).count();
    println!(
        "#{}# routes={} paths={} ecmp_routes={}",
        "SUMMARY".on_blue(),
        format_field(table.len(), 6),
        format_field(table.path_count(), 6),
        format_field(ecmp_routes, 6)
    );
    for (label, count) in protocol_counts(table) {
        let name = protocol_name(&label);
        let shown = if name == label {
            label.clone()
        } else {
            format!("{label} ({name})")
        };
        println!("  {} {}", format_field(count, 8), shown.cyan());
    }
}
