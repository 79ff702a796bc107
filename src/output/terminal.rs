//! Terminal output.
//!
//! Layout follows the classic `ipcalc` text format: a padded label column
//! followed by the value.

use super::Report;
use crate::models::{Block, Ipv4Net};
use crate::processing::{describe, Allocation, NetworkInfo, Partition};
use colored::Colorize;
use itertools::Itertools;
use std::fmt::Write;

const LABEL_WIDTH: usize = 11;

/// Format one `Label:    value` line.
fn format_line(label: &str, value: impl ToString, color: bool) -> String {
    let value = value.to_string();
    let value = if color {
        value.blue().to_string()
    } else {
        value
    };
    let label = format!("{label}:");
    format!("{label:<width$}{value}\n", width = LABEL_WIDTH)
}

/// Render any report as text.
pub fn render_text(report: &Report, color: bool) -> String {
    match report {
        Report::Network {
            info,
            target,
            partition,
        } => {
            let mut out = render_network(info, color);
            if let Some(partition) = partition {
                out.push_str(&render_partition(info.network, *target, partition, color));
            }
            out
        }
        Report::Split { info, allocation } => {
            let mut out = render_network(info, color);
            out.push_str(&render_allocation(allocation, color));
            out
        }
        Report::Range { blocks, .. } => render_blocks(blocks),
    }
}

/// Address, masks and the resulting network.
pub fn render_network(info: &NetworkInfo, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format_line("Address", info.address, color));
    out.push_str(&format_line(
        "Netmask",
        format!("{} = {}", info.netmask, info.network.prefix()),
        color,
    ));
    out.push_str(&format_line("Wildcard", info.wildcard, color));
    out.push_str("=>\n");
    out.push_str(&render_net(info, color));
    out
}

/// Network, host range and host count lines of one network.
fn render_net(info: &NetworkInfo, color: bool) -> String {
    let mut out = String::new();
    if info.is_host_route() {
        out.push_str(&format_line("Hostroute", info.network.network(), color));
    } else {
        out.push_str(&format_line("Network", info.network, color));
    }
    if let Some(host_min) = info.host_min {
        out.push_str(&format_line("HostMin", host_min, color));
    }
    if let Some(host_max) = info.host_max {
        out.push_str(&format_line("HostMax", host_max, color));
    }
    if let Some(broadcast) = info.broadcast {
        out.push_str(&format_line("Broadcast", broadcast, color));
    }
    let mut hosts = info.host_count.to_string();
    if info.is_point_to_point() {
        hosts.push_str(" (PtP Link RFC 3021)");
    }
    out.push_str(&format_line("Hosts/Net", hosts, color));
    out.push('\n');
    out
}

fn render_masks(prefix: u8, color: bool) -> String {
    let net = Ipv4Net::from_bits(0, prefix);
    let mut out = String::new();
    out.push_str(&format_line(
        "Netmask",
        format!("{} = {prefix}", net.netmask()),
        color,
    ));
    out.push_str(&format_line("Wildcard", net.wildcard(), color));
    out
}

/// Subnet listing or supernet description.
pub fn render_partition(network: Ipv4Net, target: u8, partition: &Partition, color: bool) -> String {
    let mut out = String::new();
    match partition {
        Partition::Subnetting {
            children,
            subnet_count,
            total_hosts,
            truncated,
            ..
        } => {
            let _ = writeln!(
                out,
                "Subnets after transition from /{} to /{target}\n",
                network.prefix()
            );
            out.push_str(&render_masks(target, color));
            out.push('\n');
            for (i, child) in children.iter().enumerate() {
                let _ = writeln!(out, " {}.", i + 1);
                out.push_str(&render_net(&describe(*child), color));
            }
            if *truncated {
                let _ = writeln!(out, "... stopped at {} subnets ...", children.len());
            }
            out.push('\n');
            out.push_str(&format_line("Subnets", subnet_count, color));
            out.push_str(&format_line("Hosts", total_hosts, color));
        }
        Partition::Supernetting { container } => {
            out.push_str("Supernet\n");
            out.push_str(&render_masks(container.prefix(), color));
            out.push('\n');
            out.push_str(&render_net(&describe(*container), color));
        }
    }
    out
}

/// Allocated blocks in request order, then the summary and free space.
pub fn render_allocation(allocation: &Allocation, color: bool) -> String {
    let mut out = String::new();
    for allocated in allocation.in_request_order() {
        let _ = writeln!(
            out,
            "{}. Requested size: {} hosts",
            allocated.request_index + 1,
            allocated.requested_hosts
        );
        out.push_str(&render_masks(allocated.block.network.prefix(), color));
        out.push_str(&render_net(&describe(allocated.block.network), color));
    }
    for index in &allocation.unplaced {
        let _ = writeln!(out, "{}. Not allocated", index + 1);
    }

    if let Some(overflow) = &allocation.overflow {
        let line = overflow.to_string();
        let _ = writeln!(out, "{}", if color { line.red().to_string() } else { line });
    }
    if allocation.too_small {
        let line = "Network is too small";
        let _ = writeln!(out, "{}", if color { line.red().to_string() } else { line.to_string() });
    }
    let _ = writeln!(out, "Needed size:  {} addresses.", allocation.needed_addresses);
    let _ = writeln!(
        out,
        "Used network: {}/{}",
        allocation.parent.network(),
        allocation.used_prefix
    );
    out.push_str("Unused:\n");
    out.push_str(&render_blocks(&allocation.unused));
    out
}

/// One CIDR block per line.
pub fn render_blocks(blocks: &[Block]) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let mut out = blocks.iter().join("\n");
    out.push('\n');
    out
}
