//! Builds the route table from scanner events.

use super::scanner::ScanEvent;
use crate::dialect::DetailProtocol;
use crate::error::ParseError;
use crate::models::{Path, Route, RouteTable};

pub struct RouteAggregator {
    table: RouteTable,
    detail_protocol: DetailProtocol,
}

impl RouteAggregator {
    pub fn new(detail_protocol: DetailProtocol) -> Self {
        RouteAggregator {
            table: RouteTable::new(),
            detail_protocol,
        }
    }

    /// Apply one event. `line_no` is only used for error reporting.
    pub fn apply(&mut self, event: ScanEvent, line_no: usize) -> Result<(), ParseError> {
        match event {
            ScanEvent::HeaderSeen { prefix, inline } => {
                let mut route = Route::new(&prefix);
                if let Some(attrs) = inline {
                    route.paths.push(Path::from_attributes(attrs, None));
                }
                if !self.table.insert_if_absent(route) {
                    log::debug!("line {line_no}: repeated header {prefix} ignored");
                }
            }
            ScanEvent::DetailSeen { prefix, attrs } => {
                let route =
                    self.table
                        .get_mut(&prefix)
                        .ok_or_else(|| ParseError::UnknownRoute {
                            line_no,
                            prefix: prefix.clone(),
                        })?;
                let inherited = match self.detail_protocol {
                    DetailProtocol::InheritFromRoute => route
                        .paths
                        .first()
                        .map(|p| p.protocol_label.clone()),
                    DetailProtocol::FromLine => None,
                };
                route
                    .paths
                    .push(Path::from_attributes(attrs, inherited.as_deref()));
            }
        }
        Ok(())
    }

    /// Finish the pass. Routes that never got a path are dropped.
    pub fn finish(mut self) -> RouteTable {
        for prefix in self.table.remove_empty() {
            log::warn!("Route {prefix} has no paths, dropped from report");
        }
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PathAttributes, NOT_APPLICABLE};

    fn attrs(protocol: Option<&str>, next_hop: &str) -> PathAttributes {
        PathAttributes {
            protocol: protocol.map(str::to_string),
            metric: Some("[110/2]".to_string()),
            next_hop: Some(next_hop.to_string()),
            age: Some("00:00:12".to_string()),
            interface: None,
        }
    }

    fn header(prefix: &str, inline: Option<PathAttributes>) -> ScanEvent {
        ScanEvent::HeaderSeen {
            prefix: prefix.to_string(),
            inline,
        }
    }

    fn detail(prefix: &str, attrs: PathAttributes) -> ScanEvent {
        ScanEvent::DetailSeen {
            prefix: prefix.to_string(),
            attrs,
        }
    }

    #[test]
    fn test_ecmp_sibling_inherits_protocol() {
        let mut agg = RouteAggregator::new(DetailProtocol::InheritFromRoute);
        agg.apply(header("10.1.1.0/24", Some(attrs(Some("O"), "10.0.0.1"))), 1)
            .unwrap();
        agg.apply(detail("10.1.1.0/24", attrs(None, "10.0.0.5")), 2)
            .unwrap();
        let table = agg.finish();

        let route = table.get("10.1.1.0/24").unwrap();
        assert_eq!(route.paths.len(), 2);
        assert!(route.paths.iter().all(|p| p.protocol_label == "O"));
        assert_eq!(route.paths[1].next_hop, "10.0.0.5");
        assert_eq!(route.paths[1].interface, NOT_APPLICABLE);
    }

    #[test]
    fn test_two_line_paths_keep_own_protocol() {
        let mut agg = RouteAggregator::new(DetailProtocol::FromLine);
        agg.apply(header("10.2.2.0/24", None), 1).unwrap();
        agg.apply(detail("10.2.2.0/24", attrs(Some("ospf-1"), "10.0.0.1")), 2)
            .unwrap();
        agg.apply(detail("10.2.2.0/24", attrs(Some("bgp-65000"), "10.0.0.5")), 3)
            .unwrap();
        let table = agg.finish();

        let labels: Vec<&str> = table
            .get("10.2.2.0/24")
            .unwrap()
            .paths
            .iter()
            .map(|p| p.protocol_label.as_str())
            .collect();
        assert_eq!(labels, vec!["ospf-1", "bgp-65000"]);
    }

    #[test]
    fn test_repeated_header_keeps_first() {
        let mut agg = RouteAggregator::new(DetailProtocol::InheritFromRoute);
        agg.apply(header("10.0.0.0/8", Some(attrs(Some("S"), "10.0.0.1"))), 1)
            .unwrap();
        agg.apply(header("10.0.0.0/8", Some(attrs(Some("B"), "10.0.0.9"))), 2)
            .unwrap();
        let table = agg.finish();

        let route = table.get("10.0.0.0/8").unwrap();
        assert_eq!(route.paths.len(), 1);
        assert_eq!(route.paths[0].protocol_label, "S");
    }

    #[test]
    fn test_exact_prefix_lookup() {
        let mut agg = RouteAggregator::new(DetailProtocol::InheritFromRoute);
        agg.apply(header("10.0.0.0/8", Some(attrs(Some("S"), "10.0.0.1"))), 1)
            .unwrap();
        agg.apply(header("10.0.0.0/24", Some(attrs(Some("O"), "10.0.0.2"))), 2)
            .unwrap();
        agg.apply(detail("10.0.0.0/24", attrs(None, "10.0.0.3")), 3)
            .unwrap();
        let table = agg.finish();

        assert_eq!(table.get("10.0.0.0/8").unwrap().paths.len(), 1);
        assert_eq!(table.get("10.0.0.0/24").unwrap().paths.len(), 2);
    }

    #[test]
    fn test_detail_for_unknown_route() {
        let mut agg = RouteAggregator::new(DetailProtocol::FromLine);
        let err = agg
            .apply(detail("10.9.9.0/24", attrs(Some("static"), "10.0.0.1")), 7)
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownRoute {
                line_no: 7,
                prefix: "10.9.9.0/24".to_string()
            }
        );
    }

    #[test]
    fn test_header_without_paths_dropped() {
        let mut agg = RouteAggregator::new(DetailProtocol::FromLine);
        agg.apply(header("10.3.3.0/24", None), 1).unwrap();
        assert!(agg.finish().is_empty());
    }
}
