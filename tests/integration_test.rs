//! Integration tests for subnet-calc
//!
//! These tests drive the public API the same way the binary does.

use std::net::Ipv4Addr;
use subnet_calc::cli::{execute, resolve_request, Request};
use subnet_calc::models::{cidr_to_mask, int_to_address, is_valid_netmask, mask_to_cidr};
use subnet_calc::output::{render_json, render_text, Report};
use subnet_calc::{
    allocate, compress_range, describe_network, partition, resolve_address, resolve_mask,
    CalcConfig, CalcError, Ipv4Net, Partition,
};

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_address_and_mask_resolution() {
    for s in ["0.0.0.0", "10.20.30.40", "255.255.255.255"] {
        let addr = resolve_address(s).unwrap();
        assert_eq!(int_to_address(u32::from(addr)), s);
    }
    assert!(matches!(
        resolve_address("300.1.1.1"),
        Err(CalcError::InvalidAddress(_))
    ));

    assert_eq!(resolve_mask("24").unwrap(), 24);
    assert_eq!(resolve_mask("255.255.255.0").unwrap(), 24);
    assert_eq!(resolve_mask("0.0.0.255").unwrap(), 24);
    assert!(matches!(
        resolve_mask("255.0.255.0"),
        Err(CalcError::InvalidMask(_))
    ));

    for p in 0..=32u8 {
        let mask = cidr_to_mask(p).unwrap();
        assert_eq!(mask_to_cidr(mask), p);
        assert!(is_valid_netmask(mask));
    }
    assert!(!is_valid_netmask(0xFF00FF00));
}

#[test]
fn test_host_count_boundaries() {
    let ptp = describe_network(Ipv4Addr::new(10, 0, 0, 0), 31).unwrap();
    assert_eq!(ptp.host_count, 2);
    assert!(ptp.broadcast.is_none());

    let host = describe_network(Ipv4Addr::new(10, 0, 0, 0), 32).unwrap();
    assert_eq!(host.host_count, 1);
    assert!(host.host_min.is_none() && host.host_max.is_none() && host.broadcast.is_none());
}

#[test]
fn test_subnet_and_supernet() {
    let network = Ipv4Net::parse("192.168.0.0/24").unwrap();
    match partition(network, 26, 1000).unwrap() {
        Partition::Subnetting { children, .. } => {
            let names: Vec<String> = children.iter().map(|c| c.to_string()).collect();
            assert_eq!(
                names,
                vec![
                    "192.168.0.0/26",
                    "192.168.0.64/26",
                    "192.168.0.128/26",
                    "192.168.0.192/26"
                ]
            );
        }
        other => panic!("expected subnetting, got {other:?}"),
    }

    let network = Ipv4Net::parse("192.168.1.0/24").unwrap();
    assert_eq!(
        partition(network, 22, 1000).unwrap(),
        Partition::Supernetting {
            container: Ipv4Net::parse("192.168.0.0/22").unwrap()
        }
    );
}

#[test]
fn test_compress_range() {
    let blocks = compress_range(
        Ipv4Addr::new(10, 0, 0, 0),
        Ipv4Addr::new(10, 0, 0, 255),
    )
    .unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].to_string(), "10.0.0.0/24");

    let blocks = compress_range(Ipv4Addr::new(10, 0, 0, 5), Ipv4Addr::new(10, 0, 0, 5)).unwrap();
    assert_eq!(blocks[0].to_string(), "10.0.0.5/32");

    let start = Ipv4Addr::new(172, 16, 3, 7);
    let end = Ipv4Addr::new(172, 18, 0, 0);
    let blocks = compress_range(start, end).unwrap();
    let covered: u64 = blocks.iter().map(|b| b.size).sum();
    assert_eq!(covered, u64::from(u32::from(end)) - u64::from(u32::from(start)) + 1);
    assert_eq!(blocks.first().unwrap().first(), u32::from(start));
    assert_eq!(blocks.last().unwrap().last(), u32::from(end));
}

#[test]
fn test_allocate() {
    let parent = Ipv4Net::parse("192.168.1.0/24").unwrap();
    let allocation = allocate(parent, &[2]);
    assert_eq!(allocation.blocks.len(), 1);
    assert_eq!(allocation.blocks[0].block.to_string(), "192.168.1.0/30");
    assert!(!allocation.too_small);

    let allocation = allocate(parent, &[120, 120, 120]);
    assert!(allocation.too_small);
    assert_eq!(allocation.blocks.len(), 3);
    assert!(allocation.unused.is_empty());
    assert!(allocation.unplaced.is_empty());
    assert!(allocation.overflow.is_none());
}

#[test]
fn test_split_past_address_space_returns_partial_result() {
    let request = resolve_request(&strings(&["255.255.255.0/24"]), false, &[200, 200]).unwrap();
    let report = execute(&request, &CalcConfig::default()).unwrap();
    let text = render_text(&report, false);
    assert!(text.contains("1. Requested size: 200 hosts
"));
    assert!(text.contains("2. Not allocated
"));
    assert!(text.contains("Network is too small
"));

    let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    assert_eq!(json["allocation"]["blocks"][0]["block"]["network"], "255.255.255.0/24");
    assert_eq!(json["allocation"]["unplaced"], serde_json::json!([1]));
}

#[test]
fn test_cli_text_workflow() {
    let request =
        resolve_request(&strings(&["192.168.0.1", "255.255.255.0", "26"]), false, &[]).unwrap();
    let report = execute(&request, &CalcConfig::default()).unwrap();
    let text = render_text(&report, false);
    assert!(text.starts_with("Address:   192.168.0.1\n"));
    assert!(text.contains("Subnets after transition from /24 to /26"));
    assert!(text.contains(" 4.\nNetwork:   192.168.0.192/26\n"));
    assert!(text.contains("Subnets:   4\n"));
    assert!(text.contains("Hosts:     248\n"));
}

#[test]
fn test_cli_split_workflow() {
    let request = resolve_request(&strings(&["10.0.0.0/24"]), false, &[10, 50, 100]).unwrap();
    assert!(matches!(request, Request::Split { .. }));
    let report = execute(&request, &CalcConfig::default()).unwrap();
    let text = render_text(&report, false);
    assert!(text.contains("1. Requested size: 10 hosts\n"));
    assert!(text.contains("Network:   10.0.0.192/28\n"));
    assert!(text.contains("Used network: 10.0.0.0/24\n"));
    assert!(text.ends_with("Unused:\n10.0.0.208/28\n10.0.0.224/27\n"));
}

#[test]
fn test_cli_range_json() {
    let request = resolve_request(&strings(&["10.0.0.1", "-", "10.0.0.10"]), false, &[]).unwrap();
    let report = execute(&request, &CalcConfig::default()).unwrap();
    assert!(matches!(report, Report::Range { .. }));
    let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    let blocks: Vec<&str> = value["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["network"].as_str().unwrap())
        .collect();
    assert_eq!(
        blocks,
        vec!["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/30", "10.0.0.8/31", "10.0.0.10/32"]
    );
}

#[test]
fn test_cli_respects_subnet_limit() {
    let config = CalcConfig::default().with_max_subnets(Some(10));
    let request = resolve_request(&strings(&["10.0.0.0/16", "24"]), false, &[]).unwrap();
    match execute(&request, &config).unwrap() {
        Report::Network {
            partition:
                Some(Partition::Subnetting {
                    children,
                    subnet_count,
                    truncated,
                    ..
                }),
            ..
        } => {
            assert_eq!(children.len(), 10);
            assert_eq!(subnet_count, 256);
            assert!(truncated);
        }
        other => panic!("unexpected report {other:?}"),
    }
}
