//! Netmask conversions.
//!
//! A netmask is a run of one bits from the most significant end followed only
//! by zero bits. A wildcard mask is its bitwise complement.

use crate::error::{CalcError, Result};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask bits for a prefix length, clamped to [`MAX_LENGTH`].
pub(crate) fn prefix_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::cidr_to_mask;
/// assert_eq!(cidr_to_mask(24).unwrap(), 0xFFFFFF00);
/// assert!(cidr_to_mask(33).is_err());
/// ```
pub fn cidr_to_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidMask(format!("/{len}")))
    } else {
        Ok(prefix_mask(len))
    }
}

/// Wildcard (inverse) mask for a prefix length, e.g. `/24` -> `0.0.0.255`.
pub fn wildcard_of(len: u8) -> Result<u32> {
    cidr_to_mask(len).map(|mask| !mask)
}

/// Number of leading one bits. Does not check that the rest of the mask is zero.
pub fn mask_to_cidr(mask: u32) -> u8 {
    mask.leading_ones() as u8
}

/// True when no one bit follows a zero bit, scanning from the most significant bit.
pub fn is_valid_netmask(mask: u32) -> bool {
    mask.leading_ones() + mask.trailing_zeros() == u32::BITS
}

/// Parse a netmask argument into a prefix length.
///
/// Accepted forms, tried in order:
/// 1. a prefix length, with or without a leading `/` (`24`, `/24`)
/// 2. a dotted netmask (`255.255.255.0`)
/// 3. a dotted wildcard mask (`0.0.0.255`)
pub fn parse_netmask(arg: &str) -> Result<u8> {
    let raw = arg.trim();
    let text = raw.strip_prefix('/').unwrap_or(raw);

    if let Ok(len) = text.parse::<i64>() {
        return if (0..=i64::from(MAX_LENGTH)).contains(&len) {
            Ok(len as u8)
        } else {
            Err(CalcError::InvalidMask(raw.to_string()))
        };
    }

    if let Ok(addr) = text.parse::<Ipv4Addr>() {
        let mask = u32::from(addr);
        if is_valid_netmask(mask) {
            return Ok(mask_to_cidr(mask));
        }
        if is_valid_netmask(!mask) {
            log::debug!("{text} read as wildcard mask /{}", mask_to_cidr(!mask));
            return Ok(mask_to_cidr(!mask));
        }
    }

    Err(CalcError::InvalidMask(raw.to_string()))
}
