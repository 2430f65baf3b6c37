//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 networks as printed in
//! routing tables, along with the mask arithmetic used for host ranges.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use route_table_report::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a dotted netmask (e.g. 255.255.255.0) to a prefix length.
///
/// Only contiguous masks are accepted.
pub fn mask_len(netmask: Ipv4Addr) -> Result<u8, Box<dyn Error>> {
    let bits = u32::from(netmask);
    let len = bits.leading_ones() as u8;
    if get_cidr_mask(len)? != bits {
        return Err(format!("Non contiguous netmask {netmask}").into());
    }
    Ok(len)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// IPv4 network with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Parse a strict network expression.
    ///
    /// Accepts `a.b.c.d`, `a.b.c.d/len` and `a.b.c.d/m.m.m.m`, the latter as
    /// a netmask or a hostmask. A bare address is a /32. Host bits set beyond the mask are rejected.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, mask_part) = match addr_cidr.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (addr_cidr, None),
        };
        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| format!("Invalid address {addr_part}"))?;
        let mask = match mask_part {
            None => MAX_LENGTH,
            Some(m) if !m.is_empty() && m.bytes().all(|b| b.is_ascii_digit()) => {
                let len: u8 = m.parse().map_err(|_| format!("Invalid mask {m}"))?;
                if len > MAX_LENGTH {
                    return Err("Network length is too long".into());
                }
                len
            }
            Some(m) => {
                let netmask: Ipv4Addr = m.parse().map_err(|_| format!("Invalid mask {m}"))?;
                // hostmask form, e.g. 0.0.0.255
                mask_len(netmask).or_else(|_| mask_len(Ipv4Addr::from(!u32::from(netmask))))?
            }
        };
        if cut_addr(addr, mask)? != addr {
            return Err(format!("{addr_cidr} has host bits set").into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        broadcast_addr(self.addr, self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        cut_addr(self.addr, self.mask)
    }

    /// First and last usable host addresses.
    ///
    /// A /32 has no separate last address, so `last` is `None`.
    pub fn usable_range(&self) -> Result<(Ipv4Addr, Option<Ipv4Addr>), Box<dyn Error>> {
        let lo = self.lo()?;
        if self.mask == MAX_LENGTH {
            return Ok((lo, None));
        }
        let hi = self.hi()?;
        let first = Ipv4Addr::from(u32::from(lo) + 1);
        let last = Ipv4Addr::from(u32::from(hi) - 1);
        Ok((first, Some(last)))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
