//! IPv4 address codec and CIDR network type.
//!
//! Provides [`Ipv4Net`] for representing a network address with its prefix
//! length, along with conversions between dotted quads and integers.

use super::mask::{parse_netmask, prefix_mask, MAX_LENGTH};
use crate::error::{CalcError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Parse a dotted-quad IPv4 address into its integer form.
///
/// # Examples
/// ```
/// use subnet_calc::models::address_to_int;
/// assert_eq!(address_to_int("192.168.0.1").unwrap(), 0xC0A80001);
/// assert!(address_to_int("::1").is_err());
/// ```
pub fn address_to_int(text: &str) -> Result<u32> {
    let text = text.trim();
    Ipv4Addr::from_str(text)
        .map(u32::from)
        .map_err(|_| CalcError::InvalidAddress(text.to_string()))
}

/// Format an integer address as a dotted quad.
pub fn int_to_address(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Smallest prefix length for which `ip` is a network address.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// IPv4 network in CIDR notation. The host bits of the address are always zero.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4Net {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Net {
    /// Network containing `addr` with the given prefix length.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Net> {
        if prefix > MAX_LENGTH {
            return Err(CalcError::InvalidMask(format!("/{prefix}")));
        }
        Ok(Ipv4Net::from_bits(u32::from(addr), prefix))
    }

    /// Parse `address/netmask`, where the netmask may be any form accepted by [`parse_netmask`].
    pub fn parse(addr_cidr: &str) -> Result<Ipv4Net> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CalcError::InvalidMask(addr_cidr.to_string()))?;
        let addr = address_to_int(addr)?;
        let prefix = parse_netmask(mask)?;
        Ok(Ipv4Net::from_bits(addr, prefix))
    }

    /// Build from raw bits; callers guarantee `prefix <= 32`.
    pub(crate) fn from_bits(addr: u32, prefix: u8) -> Ipv4Net {
        let prefix = prefix.min(MAX_LENGTH);
        Ipv4Net {
            addr: Ipv4Addr::from(addr & prefix_mask(prefix)),
            prefix,
        }
    }

    /// The network (lowest) address.
    pub fn network(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The network address as an integer.
    pub fn base(&self) -> u32 {
        u32::from(self.addr)
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(prefix_mask(self.prefix))
    }

    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!prefix_mask(self.prefix))
    }

    /// The highest address in the network as an integer.
    pub fn last(&self) -> u32 {
        self.base() | !prefix_mask(self.prefix)
    }

    /// The all-ones host address, reported as broadcast for prefixes up to /30.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.last())
    }

    /// Number of addresses covered, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & prefix_mask(self.prefix) == self.base()
    }
}

impl FromStr for Ipv4Net {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4Net::parse(s)
    }
}

impl Serialize for Ipv4Net {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Net {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Net::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl std::fmt::Display for Ipv4Net {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
