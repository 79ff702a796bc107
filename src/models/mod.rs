//! Value types and conversions for IPv4 subnet calculations.
//!
//! - [`Ipv4Net`] - network address with prefix length, always normalised
//! - [`Block`] and [`AddressRange`] - sized CIDR blocks and inclusive ranges
//! - mask helpers converting between prefix lengths, netmasks and wildcard masks

mod block;
mod ipv4;
mod mask;

// Re-export public types
pub use block::{AddressRange, Block};
pub use ipv4::{address_to_int, int_to_address, lo_mask, Ipv4Net};
pub use mask::{
    cidr_to_mask, is_valid_netmask, mask_to_cidr, parse_netmask, wildcard_of, MAX_LENGTH,
};
pub(crate) use mask::prefix_mask;
