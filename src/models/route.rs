//! Route, Path and the prefix-keyed route table.

use std::collections::btree_map::{self, BTreeMap};

/// Placeholder for an attribute the device did not print for a path.
pub const NOT_APPLICABLE: &str = "N/A";

/// Path attributes captured from one line. `None` means the matching
/// pattern has no such field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAttributes {
    pub protocol: Option<String>,
    pub metric: Option<String>,
    pub next_hop: Option<String>,
    pub age: Option<String>,
    pub interface: Option<String>,
}

/// One forwarding path of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Raw protocol code as printed, e.g. `O E2` or `ospf-1_ intra`.
    pub protocol_label: String,
    /// Bracketed `[distance/metric]` token.
    pub metric: String,
    pub next_hop: String,
    pub age: String,
    pub interface: String,
}

impl Path {
    /// Build a path, filling absent attributes with [`NOT_APPLICABLE`].
    ///
    /// `inherited_protocol` replaces whatever protocol the attributes carry.
    pub fn from_attributes(attrs: PathAttributes, inherited_protocol: Option<&str>) -> Path {
        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_APPLICABLE.to_string());
        let protocol_label = match inherited_protocol {
            Some(p) => p.to_string(),
            None => or_na(attrs.protocol),
        };
        Path {
            protocol_label,
            metric: or_na(attrs.metric),
            next_hop: or_na(attrs.next_hop),
            age: or_na(attrs.age),
            interface: or_na(attrs.interface),
        }
    }
}

/// A destination prefix with its paths in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub prefix: String,
    pub paths: Vec<Path>,
}

impl Route {
    pub fn new(prefix: &str) -> Route {
        Route {
            prefix: prefix.to_string(),
            paths: Vec::new(),
        }
    }

    /// Equal-cost multi-path route.
    pub fn is_ecmp(&self) -> bool {
        self.paths.len() > 1
    }
}

/// Routes keyed by the exact prefix string; iterates in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        RouteTable::default()
    }

    pub fn get(&self, prefix: &str) -> Option<&Route> {
        self.routes.get(prefix)
    }

    pub fn get_mut(&mut self, prefix: &str) -> Option<&mut Route> {
        self.routes.get_mut(prefix)
    }

    /// Insert `route` unless its prefix is already present.
    /// Returns false when the existing route was kept.
    pub fn insert_if_absent(&mut self, route: Route) -> bool {
        match self.routes.entry(route.prefix.clone()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(route);
                true
            }
        }
    }

    /// Drop routes that never received a path, returning their prefixes.
    pub fn remove_empty(&mut self) -> Vec<String> {
        let empty: Vec<String> = self
            .routes
            .values()
            .filter(|r| r.paths.is_empty())
            .map(|r| r.prefix.clone())
            .collect();
        for prefix in &empty {
            self.routes.remove(prefix);
        }
        empty
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn path_count(&self) -> usize {
        self.routes.values().map(|r| r.paths.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_defaults_to_not_applicable() {
        let path = Path::from_attributes(
            PathAttributes {
                protocol: Some("C".to_string()),
                interface: Some("Gi0/0".to_string()),
                ..Default::default()
            },
            None,
        );
        assert_eq!(path.protocol_label, "C");
        assert_eq!(path.metric, NOT_APPLICABLE);
        assert_eq!(path.next_hop, NOT_APPLICABLE);
        assert_eq!(path.age, NOT_APPLICABLE);
        assert_eq!(path.interface, "Gi0/0");
    }

    #[test]
    fn test_path_inherited_protocol_wins() {
        let attrs = PathAttributes {
            protocol: Some("ignored".to_string()),
            ..Default::default()
        };
        let path = Path::from_attributes(attrs, Some("O"));
        assert_eq!(path.protocol_label, "O");
    }

    #[test]
    fn test_table_first_insert_wins() {
        let mut table = RouteTable::new();
        let mut first = Route::new("10.0.0.0/8");
        first.paths.push(Path::from_attributes(PathAttributes::default(), Some("S")));
        assert!(table.insert_if_absent(first));
        assert!(!table.insert_if_absent(Route::new("10.0.0.0/8")));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("10.0.0.0/8").unwrap().paths.len(), 1);
    }

    #[test]
    fn test_table_sorted_lexicographically() {
        let mut table = RouteTable::new();
        for prefix in ["192.168.0.0/16", "10.0.0.0/8", "9.0.0.0/8", "10.0.0.0/24"] {
            table.insert_if_absent(Route::new(prefix));
        }
        let order: Vec<&str> = table.iter().map(|r| r.prefix.as_str()).collect();
        assert_eq!(
            order,
            vec!["10.0.0.0/24", "10.0.0.0/8", "192.168.0.0/16", "9.0.0.0/8"]
        );
    }

    #[test]
    fn test_remove_empty() {
        let mut table = RouteTable::new();
        table.insert_if_absent(Route::new("10.0.0.0/8"));
        let mut kept = Route::new("10.1.0.0/16");
        kept.paths.push(Path::from_attributes(PathAttributes::default(), None));
        table.insert_if_absent(kept);

        assert_eq!(table.remove_empty(), vec!["10.0.0.0/8".to_string()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.path_count(), 1);
    }
}
