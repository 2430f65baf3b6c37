//! IPv6 counterpart of [`super::Ipv4`], for `show ipv6 route` dumps.

use std::error::Error;
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

pub fn get_cidr_mask_v6(len: u8) -> Result<u128, Box<dyn Error>> {
    match len {
        0 => Ok(0),
        l if l > MAX_LENGTH_V6 => Err("Network length is too long".into()),
        l => Ok(u128::MAX << (MAX_LENGTH_V6 - l)),
    }
}

/// IPv6 network in prefix notation.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    pub addr: Ipv6Addr,
    pub mask: u8,
}

impl Ipv6 {
    /// Parse `addr` or `addr/len`, rejecting host bits beyond the prefix.
    pub fn new(addr_cidr: &str) -> Result<Ipv6, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, mask_part) = match addr_cidr.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (addr_cidr, None),
        };
        let addr: Ipv6Addr = addr_part
            .parse()
            .map_err(|_| format!("Invalid address {addr_part}"))?;
        let mask = match mask_part {
            None => MAX_LENGTH_V6,
            Some(m) if !m.is_empty() && m.bytes().all(|b| b.is_ascii_digit()) => {
                m.parse().map_err(|_| format!("Invalid mask {m}"))?
            }
            Some(m) => return Err(format!("Invalid mask {m}").into()),
        };
        let mask_bits = get_cidr_mask_v6(mask)?;
        if u128::from(addr) & !mask_bits != 0 {
            return Err(format!("{addr_cidr} has host bits set").into());
        }
        Ok(Ipv6 { addr, mask })
    }

    /// First and last usable addresses; `last` is `None` for a /128.
    pub fn usable_range(&self) -> Result<(Ipv6Addr, Option<Ipv6Addr>), Box<dyn Error>> {
        let mask_bits = get_cidr_mask_v6(self.mask)?;
        let lo = u128::from(self.addr) & mask_bits;
        if self.mask == MAX_LENGTH_V6 {
            return Ok((Ipv6Addr::from(lo), None));
        }
        let hi = lo | !mask_bits;
        Ok((Ipv6Addr::from(lo + 1), Some(Ipv6Addr::from(hi - 1))))
    }
}

/// Compressed hex form of `addr`.
///
/// Unlike `Ipv6Addr`'s `Display`, IPv4-mapped addresses stay in hex
/// (`::ffff:102:304`, not `::ffff:1.2.3.4`).
pub fn format_v6(addr: Ipv6Addr) -> String {
    let segments = addr.segments();
    // longest run of zero groups, first one on ties; runs of one stay expanded
    let (mut best, mut run) = ((0, 0), (0, 0));
    for (i, seg) in segments.iter().enumerate() {
        if *seg == 0 {
            if run.1 == 0 {
                run.0 = i;
            }
            run.1 += 1;
            if run.1 > best.1 {
                best = run;
            }
        } else {
            run = (0, 0);
        }
    }
    let hex = |groups: &[u16]| {
        groups
            .iter()
            .map(|g| format!("{g:x}"))
            .collect::<Vec<_>>()
            .join(":")
    };
    if best.1 < 2 {
        return hex(&segments[..]);
    }
    let (start, end) = (best.0, best.0 + best.1);
    format!("{}::{}", hex(&segments[..start]), hex(&segments[end..]))
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_v6(self.addr), self.mask)
    }
}
