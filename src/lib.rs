//! IPv4 subnet calculator.
//!
//! Derives network, broadcast and host range from an address and prefix,
//! lists subnets or the containing supernet for a second prefix, packs host
//! capacities into a network, and compresses address ranges into CIDR blocks.
//!
//! ```
//! use subnet_calc::{compress_range, describe_network, resolve_address, resolve_mask};
//!
//! let address = resolve_address("192.168.0.1").unwrap();
//! let prefix = resolve_mask("255.255.255.0").unwrap();
//! let info = describe_network(address, prefix).unwrap();
//! assert_eq!(info.host_count, 254);
//!
//! let blocks = compress_range(address, resolve_address("192.168.0.2").unwrap()).unwrap();
//! assert_eq!(blocks.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use std::net::Ipv4Addr;

pub use config::CalcConfig;
pub use error::{CalcError, Result};
pub use models::{AddressRange, Block, Ipv4Net};
pub use processing::{
    allocate, compress_range, describe_network, partition, Allocation, NetworkInfo, Partition,
};

/// Parse a dotted-quad address.
pub fn resolve_address(text: &str) -> Result<Ipv4Addr> {
    models::address_to_int(text).map(Ipv4Addr::from)
}

/// Parse a netmask given as a prefix length, dotted netmask or wildcard mask.
pub fn resolve_mask(text: &str) -> Result<u8> {
    models::parse_netmask(text)
}
