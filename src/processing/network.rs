//! Single network description.
//!
//! Host range rules follow RFC 3021 for /31 point-to-point links and treat
//! /32 as a host route.

use crate::error::{CalcError, Result};
use crate::models::{Ipv4Net, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Derived facts about the network an address belongs to.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The address the description was requested for.
    pub address: Ipv4Addr,
    pub network: Ipv4Net,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    /// Absent for /31 and /32.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<Ipv4Addr>,
    /// Absent for /32.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_min: Option<Ipv4Addr>,
    /// Absent for /32.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_max: Option<Ipv4Addr>,
    pub host_count: u64,
}

impl NetworkInfo {
    /// True for a /32 host route.
    pub fn is_host_route(&self) -> bool {
        self.network.prefix() == MAX_LENGTH
    }

    /// True for a /31 point-to-point link.
    pub fn is_point_to_point(&self) -> bool {
        self.network.prefix() == MAX_LENGTH - 1
    }
}

/// Usable host addresses in a network of the given prefix length.
///
/// ```
/// use subnet_calc::processing::host_count;
/// assert_eq!(host_count(24).unwrap(), 254);
/// assert_eq!(host_count(31).unwrap(), 2);
/// assert_eq!(host_count(32).unwrap(), 1);
/// ```
pub fn host_count(prefix: u8) -> Result<u64> {
    match prefix {
        31 => Ok(2),
        32 => Ok(1),
        p if p < 31 => Ok((1u64 << (MAX_LENGTH - p)) - 2),
        p => Err(CalcError::InvalidMask(format!("/{p}"))),
    }
}

/// Describe the network containing `address` at prefix length `prefix`.
pub fn describe_network(address: Ipv4Addr, prefix: u8) -> Result<NetworkInfo> {
    let network = Ipv4Net::new(address, prefix)?;
    let mut info = describe(network);
    info.address = address;
    Ok(info)
}

/// Describe an already normalised network.
pub fn describe(network: Ipv4Net) -> NetworkInfo {
    let base = network.base();
    let last = network.last();
    let (host_min, host_max, broadcast, host_count) = match network.prefix() {
        32 => (None, None, None, 1),
        31 => (Some(base), Some(last), None, 2),
        _ => (Some(base + 1), Some(last - 1), Some(last), network.size() - 2),
    };
    log::trace!("describe({network}) hosts={host_count}");

    NetworkInfo {
        address: network.network(),
        network,
        netmask: network.netmask(),
        wildcard: network.wildcard(),
        broadcast: broadcast.map(Ipv4Addr::from),
        host_min: host_min.map(Ipv4Addr::from),
        host_max: host_max.map(Ipv4Addr::from),
        host_count,
    }
}
