//! Range deaggregation.
//!
//! Splits an inclusive address range into the fewest CIDR blocks whose union
//! is exactly the range, by repeatedly taking the biggest aligned block that
//! still ends inside it.

use crate::error::Result;
use crate::models::{lo_mask, AddressRange, Block, Ipv4Net, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Compress `start..=end` into CIDR blocks, in ascending order.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calc::processing::compress_range;
/// let blocks = compress_range(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 0, 0, 255)).unwrap();
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].to_string(), "10.0.0.0/24");
/// ```
pub fn compress_range(start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<Block>> {
    Ok(AddressRange::new(start, end)?.compress())
}

/// Deaggregate `start..=end`; yields nothing when `start > end`.
pub(crate) fn deaggregate(start: u32, end: u32) -> Vec<Block> {
    let end = u64::from(end);
    let mut next_ip = u64::from(start);
    let mut blocks = Vec::new();

    // u64 cursor so a block ending at 255.255.255.255 does not wrap
    while next_ip <= end {
        let start_ip = Ipv4Addr::from(next_ip as u32);
        let mask = find_biggest_block(start_ip, end - next_ip + 1);
        let block = Block::new(Ipv4Net::from_bits(next_ip as u32, mask));
        log::trace!("deaggregate: {block} ({} addresses)", block.size);
        next_ip += block.size;
        blocks.push(block);
    }

    log::debug!("deaggregate produced {} block(s)", blocks.len());
    blocks
}

/// Shortest prefix that starts at `start_ip` and covers at most `remaining` addresses.
///
/// The returned mask is constrained by:
/// 1. the alignment of `start_ip` (it must be the network address)
/// 2. the block size, which may not exceed `remaining`
fn find_biggest_block(start_ip: Ipv4Addr, remaining: u64) -> u8 {
    debug_assert!(remaining > 0 && remaining <= 1 << 32);
    let min_mask_for_alignment = lo_mask(start_ip);
    let size_bits = (u64::BITS - 1 - remaining.leading_zeros()) as u8;
    let min_mask_for_size = MAX_LENGTH - size_bits;
    min_mask_for_alignment.max(min_mask_for_size)
}
