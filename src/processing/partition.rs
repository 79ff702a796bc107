//! Subnetting and supernetting of a base network.

use super::network::host_count;
use crate::error::{CalcError, Result};
use crate::models::{Ipv4Net, MAX_LENGTH};
use serde::Serialize;

/// Outcome of re-prefixing a network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Partition {
    /// Split into `subnet_count` children of the target prefix.
    Subnetting {
        /// Children in ascending address order, at most the enumeration limit.
        children: Vec<Ipv4Net>,
        subnet_count: u64,
        hosts_per_subnet: u64,
        total_hosts: u64,
        /// Set when `children` stops short of `subnet_count`.
        truncated: bool,
    },
    /// Aggregated into the network of the target prefix that contains the input.
    Supernetting { container: Ipv4Net },
}

/// Re-prefix `network` to `target`.
///
/// A longer (or equal) target splits the network, a shorter one aggregates it.
/// `max_subnets` only bounds how many children are listed.
pub fn partition(network: Ipv4Net, target: u8, max_subnets: usize) -> Result<Partition> {
    if target > MAX_LENGTH {
        return Err(CalcError::InvalidMask(format!("/{target}")));
    }
    if target < network.prefix() {
        let container = supernet(network, target)?;
        return Ok(Partition::Supernetting { container });
    }
    subnets(network, target, max_subnets)
}

/// Enumerate the children of `network` at prefix `target`.
pub fn subnets(network: Ipv4Net, target: u8, max_subnets: usize) -> Result<Partition> {
    if target > MAX_LENGTH || target < network.prefix() {
        return Err(CalcError::InvalidMask(format!(
            "/{target} can not split {network}"
        )));
    }

    let subnet_count = 1u64 << (target - network.prefix());
    let listed = subnet_count.min(max_subnets as u64);
    let shift = MAX_LENGTH - target;
    let base = u64::from(network.base());

    let children = (0..listed)
        .map(|index| Ipv4Net::from_bits((base | (index << shift)) as u32, target))
        .collect();

    let truncated = listed < subnet_count;
    if truncated {
        log::warn!("Stopped listing {network} -> /{target} at {listed} of {subnet_count} subnets");
    }

    let hosts_per_subnet = host_count(target)?;
    Ok(Partition::Subnetting {
        children,
        subnet_count,
        hosts_per_subnet,
        total_hosts: hosts_per_subnet * subnet_count,
        truncated,
    })
}

/// The network of prefix `target` containing `network`.
pub fn supernet(network: Ipv4Net, target: u8) -> Result<Ipv4Net> {
    if target > network.prefix() {
        return Err(CalcError::InvalidMask(format!(
            "/{target} is not a supernet of {network}"
        )));
    }
    Ipv4Net::new(network.network(), target)
}
