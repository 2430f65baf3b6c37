//! Per device family line-matching rules.
//!
//! - [`ios`] - single-line dialect, header and first path share a line
//! - [`nxos`] - two-line dialect, every path is on its own indented line
//!
//! Patterns are tried in declaration order and the first match wins.

mod ios;
mod nxos;

use crate::models::PathAttributes;
use regex::{Captures, Regex};

/// Device family of a routing table dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Cisco IOS `show ip route`.
    Ios,
    /// Cisco NX-OS `show ip route`.
    Nxos,
}

impl Dialect {
    pub fn rules(self) -> &'static RuleSet {
        match self {
            Dialect::Ios => &ios::RULES,
            Dialect::Nxos => &nxos::RULES,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.rules().name)
    }
}

/// Where the protocol of a detail-line path comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailProtocol {
    /// Copied from the first path of the route (ECMP siblings).
    InheritFromRoute,
    /// Captured from the detail line itself.
    FromLine,
}

/// A recognised route header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub prefix: String,
    /// First path printed on the header line, if the dialect puts one there.
    pub inline: Option<PathAttributes>,
}

/// Line rules for one dialect.
#[derive(Debug)]
pub struct RuleSet {
    pub name: &'static str,
    /// Substring marking the end of the preamble.
    pub start_marker: &'static str,
    /// Lines containing any of these are never data.
    pub ignored_phrases: &'static [&'static str],
    pub header_patterns: Vec<Regex>,
    pub detail_patterns: Vec<Regex>,
    /// Whether header lines carry the first path.
    pub header_has_path: bool,
    pub detail_protocol: DetailProtocol,
    /// Separator inside protocol tokens, rewritten to `_`.
    pub protocol_separator: Option<char>,
}

/// Joiner replacing [`RuleSet::protocol_separator`] in protocol tokens.
pub const PROTOCOL_JOINER: &str = "_";

pub(crate) fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid Regex?"))
        .collect()
}

fn capture(caps: &Captures, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().trim().to_string())
}

impl RuleSet {
    pub fn is_start_marker(&self, line: &str) -> bool {
        line.contains(self.start_marker)
    }

    pub fn is_ignored(&self, line: &str) -> bool {
        self.ignored_phrases.iter().any(|p| line.contains(p))
    }

    fn attributes(&self, caps: &Captures) -> PathAttributes {
        let protocol = capture(caps, "protocol").map(|p| match self.protocol_separator {
            Some(sep) => p.replace(sep, PROTOCOL_JOINER),
            None => p,
        });
        PathAttributes {
            protocol,
            metric: capture(caps, "metric"),
            next_hop: capture(caps, "next_hop"),
            age: capture(caps, "age"),
            interface: capture(caps, "interface"),
        }
    }

    /// Try the header patterns in order.
    pub fn match_header(&self, line: &str) -> Option<HeaderMatch> {
        self.header_patterns.iter().find_map(|re| {
            let caps = re.captures(line)?;
            let prefix = capture(&caps, "route")?;
            let inline = self.header_has_path.then(|| self.attributes(&caps));
            Some(HeaderMatch { prefix, inline })
        })
    }

    /// Try the detail patterns in order.
    pub fn match_detail(&self, line: &str) -> Option<PathAttributes> {
        self.detail_patterns
            .iter()
            .find_map(|re| re.captures(line))
            .map(|caps| self.attributes(&caps))
    }
}
