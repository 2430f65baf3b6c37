//! Cisco NX-OS `show ip route`: a `prefix, ubest/mbest: ...` header line,
//! then one `*via ...` line per path.

use super::{compile, DetailProtocol, RuleSet};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref RULES: RuleSet = RuleSet {
        name: "Cisco NXOS",
        start_marker: "<string>",
        ignored_phrases: &["subnetted"],
        header_patterns: compile(&[r"(?P<route>[0-9].*), ubest/mbest: (?P<value>.*)"]),
        detail_patterns: compile(&[
            r"via (?P<next_hop>.*), (?P<interface>.*), (?P<metric>\[.*\]), (?P<age>.*?), (?P<protocol>.*)",
            r"via (?P<next_hop>.*), (?P<metric>\[.*\]), (?P<age>.*?), (?P<protocol>.*)",
        ]),
        header_has_path: false,
        detail_protocol: DetailProtocol::FromLine,
        protocol_separator: Some(','),
    };
}
