//! Cisco IOS `show ip route`: the first path of a route is on its header line,
//! further equal-cost paths follow as indented `[x/y] via ...` lines.

use super::{compile, DetailProtocol, RuleSet};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref RULES: RuleSet = RuleSet {
        name: "Cisco IOS",
        start_marker: "Gateway",
        ignored_phrases: &["variably", "subnetted"],
        header_patterns: compile(&[
            // BGP and IGP codes with a sub-type, e.g. "O E2"
            r"(?P<protocol>[a-zA-Z] ..) (?P<route>.*) (?P<metric>.*) via (?P<next_hop>.*), ?(?P<age>.*), ?(?P<interface>.*)",
            // IGP (OSPF, EIGRP ...)
            r"(?P<protocol>[a-zA-Z]..) (?P<route>.*) (?P<metric>.*) via (?P<next_hop>.*), ?(?P<age>.*), ?(?P<interface>.*)",
            r"(?P<protocol>[a-zA-Z]) (?P<route>.*) is a summary, (?P<age>.*), (?P<interface>.*)",
            r"(?P<protocol>[a-zA-Z]..) (?P<route>.*) is a summary, (?P<age>.*), (?P<interface>.*)",
            // BGP without an outgoing interface
            r"(?P<protocol>B.*|B\*.*) (?P<route>.*) (?P<metric>.*) via (?P<next_hop>.*), (?P<age>.*)",
            // Static
            r"(?P<protocol>S.*|S\*.*) (?P<route>.*) (?P<metric>.*) via (?P<next_hop>.*)",
            // Connected and local
            r"(?P<protocol>C.*|L.*) (?P<route>.*) is directly connected, (?P<interface>.*)",
        ]),
        detail_patterns: compile(&[
            r"(?P<metric>\[.*/.*\]) via (?P<next_hop>.*), (?P<age>.*), (?P<interface>.*)",
            r"(?P<metric>\[.*/.*\]) via (?P<next_hop>.*), (?P<age>.*)",
        ]),
        header_has_path: true,
        detail_protocol: DetailProtocol::InheritFromRoute,
        protocol_separator: None,
    };
}
