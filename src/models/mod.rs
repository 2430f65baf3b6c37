//! Domain models for the route table report.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Route`], [`Path`] and [`RouteTable`] - the parsed routing table
//! - [`Ipv4`] / [`Ipv6`] - prefix arithmetic behind [`host_range`]
//! - [`protocol_name`] - decoding of raw route codes for display

mod host_range;
mod ipv4;
mod ipv6;
mod protocol;
mod route;

// Re-export public types
pub use host_range::{host_range, HostRange, HOST_RANGE_ERROR};
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, mask_len, Ipv4, MAX_LENGTH};
pub use ipv6::{format_v6, get_cidr_mask_v6, Ipv6, MAX_LENGTH_V6};
pub use protocol::protocol_name;
pub use route::{Path, PathAttributes, Route, RouteTable, NOT_APPLICABLE};
