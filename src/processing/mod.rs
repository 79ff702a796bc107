//! Subnet calculation logic.
//!
//! - [`network`] - host range and broadcast of a single network
//! - [`partition`] - splitting into subnets or aggregating into a supernet
//! - [`allocate`] - packing host capacities into a parent network
//! - [`deaggregate`] - compressing an address range into CIDR blocks

mod allocate;
mod deaggregate;
mod network;
mod partition;

// Re-export public functions
pub use allocate::{allocate, prefix_for_size, round_up_pow2, AllocatedBlock, Allocation};
pub use deaggregate::compress_range;
pub(crate) use deaggregate::deaggregate;
pub use network::{describe, describe_network, host_count, NetworkInfo};
pub use partition::{partition, subnets, supernet, Partition};
