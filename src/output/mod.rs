//! Output formatting for calculation results.
//!
//! - [`terminal`] - aligned text, optionally colored
//! - [`json`] - JSON documents

mod json;
mod terminal;

use crate::models::Block;
use crate::processing::{Allocation, NetworkInfo, Partition};
use serde::Serialize;
use std::net::Ipv4Addr;

pub use json::render_json;
pub use terminal::{render_allocation, render_blocks, render_network, render_partition, render_text};

/// Everything one invocation produced, ready to be rendered.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Report {
    /// Description of one network, optionally re-prefixed to `target`.
    Network {
        info: NetworkInfo,
        target: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        partition: Option<Partition>,
    },
    /// Host capacities packed into the described network.
    Split {
        info: NetworkInfo,
        allocation: Allocation,
    },
    /// An address range compressed into CIDR blocks.
    Range {
        start: Ipv4Addr,
        end: Ipv4Addr,
        blocks: Vec<Block>,
    },
}
