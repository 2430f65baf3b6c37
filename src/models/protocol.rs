//! Human readable names for IOS route codes.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref PROTOCOL_NAMES: HashMap<&'static str, &'static str> = HashMap::from([
        ("C", "Connected"),
        ("S", "Static"),
        ("S*", "Static*"),
        ("R", "RIP"),
        ("B", "BGP"),
        ("B*", "BGP*"),
        ("D", "EIGRP"),
        ("D*", "EIGRP*"),
        ("D EX", "EIGRP External"),
        ("O", "OSPF"),
        ("O*", "OSPF*"),
        ("O*E1", "OSPF* Candidate Default"),
        ("O*E2", "OSPF* Candidate Default"),
        ("O E1", "OSPF External 1"),
        ("O E2", "OSPF External 2"),
        ("O IA", "OSPF Inter-Area"),
        ("O N1", "OSPF NSSA External Type 1"),
        ("O N2", "OSPF NSSA External Type 2"),
        ("L", "Local"),
        ("i", "IS-IS"),
        ("i su", "IS-IS Summary"),
        ("i L1", "IS-IS Level-1"),
        ("i L2", "IS-IS Level-2"),
        ("i ia", "IS-IS Inter-Area"),
        ("*", "Candidate Default"),
    ]);
}

/// Decode a raw protocol code; unknown codes come back unchanged.
pub fn protocol_name(code: &str) -> &str {
    PROTOCOL_NAMES.get(code).copied().unwrap_or(code)
}
