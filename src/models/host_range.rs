//! Usable host range of a route prefix.

use super::{format_v6, Ipv4, Ipv6};
use std::error::Error;

/// Value reported for both bounds when a prefix is not a valid network.
pub const HOST_RANGE_ERROR: &str = "error";

/// First and last usable host address of a prefix, already formatted for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRange {
    pub first: String,
    pub last: String,
}

impl HostRange {
    fn error() -> Self {
        HostRange {
            first: HOST_RANGE_ERROR.to_string(),
            last: HOST_RANGE_ERROR.to_string(),
        }
    }
}

fn usable_bounds(prefix: &str) -> Result<(String, String), Box<dyn Error>> {
    let as_string = |last: Option<String>| last.unwrap_or_default();
    if prefix.contains(':') {
        let (first, last) = Ipv6::new(prefix)?.usable_range()?;
        Ok((format_v6(first), as_string(last.map(format_v6))))
    } else {
        let (first, last) = Ipv4::new(prefix)?.usable_range()?;
        Ok((first.to_string(), as_string(last.map(|l| l.to_string()))))
    }
}

/// Compute the usable host range of `prefix`.
///
/// A single-address network reports itself as `first` and an empty `last`.
/// Anything that is not a network (e.g. `default`) degrades to `error`/`error`.
pub fn host_range(prefix: &str) -> HostRange {
    match usable_bounds(prefix) {
        Ok((first, last)) => HostRange { first, last },
        Err(e) => {
            log::debug!("host_range({prefix}) not a network: {e}");
            HostRange::error()
        }
    }
}
