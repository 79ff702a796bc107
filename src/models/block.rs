//! Sized CIDR blocks and inclusive address ranges.

use super::Ipv4Net;
use crate::error::{CalcError, Result};
use serde::Serialize;
use std::net::Ipv4Addr;

/// A network annotated with the number of addresses it covers.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block {
    pub network: Ipv4Net,
    pub size: u64,
}

impl Block {
    pub fn new(network: Ipv4Net) -> Block {
        Block {
            network,
            size: network.size(),
        }
    }

    /// First address in the block as an integer.
    pub fn first(&self) -> u32 {
        self.network.base()
    }

    /// Last address in the block as an integer.
    pub fn last(&self) -> u32 {
        self.network.last()
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.network.fmt(f)
    }
}

/// Inclusive range of addresses with `start <= end`.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressRange {
    start: Ipv4Addr,
    end: Ipv4Addr,
}

impl AddressRange {
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Result<AddressRange> {
        if start > end {
            return Err(CalcError::RangeInverted { start, end });
        }
        Ok(AddressRange { start, end })
    }

    pub fn start(&self) -> Ipv4Addr {
        self.start
    }

    pub fn end(&self) -> Ipv4Addr {
        self.end
    }

    /// Minimal list of CIDR blocks covering exactly this range.
    pub fn compress(&self) -> Vec<Block> {
        crate::processing::deaggregate(u32::from(self.start), u32::from(self.end))
    }
}
