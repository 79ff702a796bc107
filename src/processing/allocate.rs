//! Variable-length subnet allocation.
//!
//! Every request is rounded up to a power-of-two block that also holds the
//! network and broadcast addresses. Blocks are packed from the start of the
//! parent network biggest first, which keeps each one aligned on its own size.

use super::deaggregate::deaggregate;
use crate::error::CalcError;
use crate::models::{Block, Ipv4Net, MAX_LENGTH};
use serde::Serialize;

/// One packed request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocatedBlock {
    /// Position of the request in the caller's list.
    pub request_index: usize,
    pub requested_hosts: u32,
    pub block: Block,
}

/// Result of packing a list of host capacities into a parent network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub parent: Ipv4Net,
    /// Allocated blocks in address order.
    pub blocks: Vec<AllocatedBlock>,
    /// Sum of all requested block sizes, placed or not.
    pub needed_addresses: u64,
    /// Prefix of the smallest network that holds `needed_addresses`.
    pub used_prefix: u8,
    /// The blocks run past the end of `parent`. The packing is still reported.
    pub too_small: bool,
    /// Free space between the last block and the parent's broadcast address.
    pub unused: Vec<Block>,
    /// Requests (by index) left out because they would pass 255.255.255.255.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unplaced: Vec<usize>,
    /// Set when `unplaced` is not empty.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_overflow"
    )]
    pub overflow: Option<CalcError>,
}

fn serialize_overflow<S>(
    overflow: &Option<CalcError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    match overflow {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

impl Allocation {
    /// Blocks in the order the capacities were requested.
    pub fn in_request_order(&self) -> Vec<&AllocatedBlock> {
        let mut blocks: Vec<&AllocatedBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.request_index);
        blocks
    }
}

/// Smallest power of two that is `>= n`, and at least 1.
pub fn round_up_pow2(n: u64) -> u64 {
    n.max(1).next_power_of_two()
}

/// Prefix length of the smallest network holding `size` addresses.
///
/// Sizes beyond the IPv4 space saturate at /0.
pub fn prefix_for_size(size: u64) -> u8 {
    if size <= 1 {
        return MAX_LENGTH;
    }
    let bits = u64::BITS - (size - 1).leading_zeros();
    u32::from(MAX_LENGTH).saturating_sub(bits) as u8
}

/// Pack `capacities` (host counts) into `parent`.
///
/// Requests of equal block size keep their relative order. A parent that is
/// too small is flagged in [`Allocation::too_small`]. Packing stops at the
/// first block that would pass 255.255.255.255; the blocks placed so far are
/// still returned and the rest are listed in [`Allocation::unplaced`].
pub fn allocate(parent: Ipv4Net, capacities: &[u32]) -> Allocation {
    let mut requests: Vec<(usize, u32, u64)> = capacities
        .iter()
        .enumerate()
        .map(|(i, &hosts)| (i, hosts, round_up_pow2(u64::from(hosts) + 2)))
        .collect();

    // Stable sort, biggest first. Equal sizes stay in request order.
    requests.sort_by(|a, b| b.2.cmp(&a.2));

    let needed_addresses = requests
        .iter()
        .fold(0u64, |total, (_, _, size)| total.saturating_add(*size));

    let address_space_end = 1u64 << MAX_LENGTH;
    let mut next_ip = u64::from(parent.base());
    let mut blocks = Vec::with_capacity(requests.len());
    let mut unplaced = Vec::new();

    for (request_index, requested_hosts, size) in requests {
        if !unplaced.is_empty() || next_ip + size > address_space_end {
            unplaced.push(request_index);
            continue;
        }
        let block = Block::new(Ipv4Net::from_bits(next_ip as u32, prefix_for_size(size)));
        log::debug!(
            "allocate: request #{} for {requested_hosts} hosts -> {block}",
            request_index + 1
        );
        next_ip += size;
        blocks.push(AllocatedBlock {
            request_index,
            requested_hosts,
            block,
        });
    }

    let overflow = if unplaced.is_empty() {
        None
    } else {
        unplaced.sort_unstable();
        let e = CalcError::AllocationTooLarge {
            needed: needed_addresses,
            base: parent.network(),
        };
        log::warn!("{e}, {} request(s) left out", unplaced.len());
        Some(e)
    };

    let used_prefix = prefix_for_size(needed_addresses);
    let too_small = used_prefix < parent.prefix() || overflow.is_some();
    if too_small {
        log::warn!(
            "Network {parent} is too small: {needed_addresses} addresses need a /{used_prefix}"
        );
    }

    let broadcast = u64::from(parent.last());
    let unused = if next_ip <= broadcast {
        deaggregate(next_ip as u32, broadcast as u32)
    } else {
        Vec::new()
    };

    Allocation {
        parent,
        blocks,
        needed_addresses,
        used_prefix,
        too_small,
        unused,
        unplaced,
        overflow,
    }
}
