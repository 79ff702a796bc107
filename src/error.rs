//! Error types for subnet calculations.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Errors returned by the address, mask and allocation operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Text that is not a dotted-quad IPv4 address.
    #[error("INVALID ADDRESS: {0}")]
    InvalidAddress(String),

    /// Prefix length out of [0,32], or a dotted mask that is neither a netmask nor a wildcard.
    #[error("INVALID MASK: {0}")]
    InvalidMask(String),

    /// Second address of a range that does not parse.
    #[error("INVALID ADDRESS2: {0}")]
    InvalidAddress2(String),

    /// Range mode given only one address.
    #[error("INVALID ADDRESS2: missing")]
    MissingAddress2,

    /// First netmask on the command line.
    #[error("INVALID MASK1: {0}")]
    InvalidMask1(String),

    /// Second netmask on the command line.
    #[error("INVALID MASK2: {0}")]
    InvalidMask2(String),

    /// Range deaggregation asked for a range that ends before it starts.
    #[error("Range start {start} is after range end {end}")]
    RangeInverted { start: Ipv4Addr, end: Ipv4Addr },

    /// Packing the requested blocks would run past 255.255.255.255.
    #[error("Allocation of {needed} addresses starting at {base} overflows the IPv4 address space")]
    AllocationTooLarge { needed: u64, base: Ipv4Addr },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CalcError>;
