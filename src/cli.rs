//! Command-line arguments and their resolution into a calculation.

use crate::config::CalcConfig;
use crate::error::{CalcError, Result};
use crate::models::{parse_netmask, Ipv4Net};
use crate::output::Report;
use crate::processing::{allocate, compress_range, describe_network, partition};
use crate::resolve_address;
use clap::Parser;
use std::net::Ipv4Addr;

/// Prefix length used when no netmask is given.
pub const DEFAULT_PREFIX: u8 = 24;

/// Calculate broadcast, network, wildcard mask and host range from an IPv4
/// address and netmask. A second netmask lists the subnets or the supernet.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  subnet-calc 192.168.0.1/24
  subnet-calc 192.168.0.1/255.255.128.0
  subnet-calc 192.168.0.1 255.255.128.0 255.255.192.0
  subnet-calc 192.168.0.1 0.0.63.255
  subnet-calc 10.0.0.3 - 10.0.2.17        deaggregate address range
  subnet-calc 10.0.0.0/24 -s 100,50,10    split network to subnets")]
pub struct Args {
    /// ADDRESS[[/]NETMASK] [NETMASK], or ADDRESS1 - ADDRESS2
    #[arg(value_name = "ARGS", required = true, num_args = 1..=3)]
    pub args: Vec<String>,

    /// Deaggregate the range ADDRESS1 ADDRESS2 into CIDR blocks
    #[arg(short = 'r', long = "range")]
    pub range: bool,

    /// Split the network into subnets holding the given numbers of hosts
    #[arg(short = 's', long = "split", value_delimiter = ',', value_name = "SIZES")]
    pub split: Vec<u32>,

    /// Print results as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Display ANSI color codes
    #[arg(long = "color")]
    pub color: bool,

    /// Don't display ANSI color codes
    #[arg(short = 'n', long = "nocolor", conflicts_with = "color")]
    pub no_color: bool,

    /// Maximum number of subnets listed [env: SUBNET_CALC_MAX_SUBNETS] [default: 1000]
    #[arg(long = "max-subnets", value_name = "N")]
    pub max_subnets: Option<usize>,
}

impl Args {
    pub fn use_color(&self) -> bool {
        self.color && !self.no_color
    }

    pub fn request(&self) -> Result<Request> {
        resolve_request(&self.args, self.range, &self.split)
    }
}

/// A fully parsed calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Describe `address/prefix`, re-prefixed to `target` when it differs.
    Network {
        address: Ipv4Addr,
        prefix: u8,
        target: u8,
    },
    /// Pack host capacities into the network of `address/prefix`.
    Split {
        address: Ipv4Addr,
        prefix: u8,
        capacities: Vec<u32>,
    },
    /// Deaggregate `start..=end`.
    Range { start: Ipv4Addr, end: Ipv4Addr },
}

/// Turn positional arguments into a [`Request`].
///
/// `ADDRESS1 - ADDRESS2` always selects range mode. Otherwise every argument
/// is split on `/` so `10.0.0.0/8 16` and `10.0.0.0 8 16` are equivalent.
pub fn resolve_request(args: &[String], range: bool, split: &[u32]) -> Result<Request> {
    let dash_range = args.len() == 3 && args[1] == "-";
    if range || dash_range {
        let addresses: Vec<&String> = args.iter().filter(|a| a.as_str() != "-").collect();
        let (start, end) = match addresses.as_slice() {
            [start, end] => (
                resolve_address(start)?,
                resolve_address(end).map_err(|_| CalcError::InvalidAddress2(end.to_string()))?,
            ),
            _ => return Err(CalcError::MissingAddress2),
        };
        return Ok(Request::Range { start, end });
    }

    let parts: Vec<&str> = args
        .iter()
        .flat_map(|arg| match arg.split_once('/') {
            Some((addr, "")) => vec![addr],
            Some(("", mask)) => vec![mask],
            Some((addr, mask)) => vec![addr, mask],
            None => vec![arg.as_str()],
        })
        .collect();

    let address = match parts.first() {
        Some(text) => resolve_address(text)?,
        None => return Err(CalcError::InvalidAddress(String::new())),
    };
    let prefix = match parts.get(1) {
        Some(mask) => parse_netmask(mask).map_err(|_| CalcError::InvalidMask1(mask.to_string()))?,
        None => DEFAULT_PREFIX,
    };
    let target = match parts.get(2) {
        Some(mask) => parse_netmask(mask).map_err(|_| CalcError::InvalidMask2(mask.to_string()))?,
        None => prefix,
    };
    if parts.len() > 3 {
        log::warn!("Ignoring extra arguments: {:?}", &parts[3..]);
    }

    if !split.is_empty() {
        return Ok(Request::Split {
            address,
            prefix,
            capacities: split.to_vec(),
        });
    }
    Ok(Request::Network {
        address,
        prefix,
        target,
    })
}

/// Run a request against the calculation core.
pub fn execute(request: &Request, config: &CalcConfig) -> Result<Report> {
    log::info!("execute {request:?}");
    match request {
        Request::Network {
            address,
            prefix,
            target,
        } => {
            let info = describe_network(*address, *prefix)?;
            let partition = if target != prefix {
                Some(partition(info.network, *target, config.max_subnets)?)
            } else {
                None
            };
            Ok(Report::Network {
                info,
                target: *target,
                partition,
            })
        }
        Request::Split {
            address,
            prefix,
            capacities,
        } => {
            let info = describe_network(*address, *prefix)?;
            let allocation = allocate(Ipv4Net::new(*address, *prefix)?, capacities);
            Ok(Report::Split { info, allocation })
        }
        Request::Range { start, end } => Ok(Report::Range {
            start: *start,
            end: *end,
            blocks: compress_range(*start, *end)?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Partition;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_cidr_forms() {
        let expected = Request::Network {
            address: Ipv4Addr::new(192, 168, 0, 1),
            prefix: 17,
            target: 17,
        };
        for args in [
            vec!["192.168.0.1/17"],
            vec!["192.168.0.1/255.255.128.0"],
            vec!["192.168.0.1", "255.255.128.0"],
            vec!["192.168.0.1", "/17"],
            vec!["192.168.0.1", "0.0.127.255"],
        ] {
            assert_eq!(resolve_request(&strings(&args), false, &[]).unwrap(), expected, "{args:?}");
        }
    }

    #[test]
    fn test_resolve_defaults_and_second_mask() {
        assert_eq!(
            resolve_request(&strings(&["10.1.2.3"]), false, &[]).unwrap(),
            Request::Network {
                address: Ipv4Addr::new(10, 1, 2, 3),
                prefix: 24,
                target: 24
            }
        );
        assert_eq!(
            resolve_request(&strings(&["10.1.2.3/", "26"]), false, &[]).unwrap(),
            Request::Network {
                address: Ipv4Addr::new(10, 1, 2, 3),
                prefix: 26,
                target: 26
            }
        );
        assert_eq!(
            resolve_request(&strings(&["192.168.0.1", "255.255.128.0", "255.255.192.0"]), false, &[])
                .unwrap(),
            Request::Network {
                address: Ipv4Addr::new(192, 168, 0, 1),
                prefix: 17,
                target: 18
            }
        );
    }

    #[test]
    fn test_resolve_range() {
        let expected = Request::Range {
            start: Ipv4Addr::new(10, 0, 0, 3),
            end: Ipv4Addr::new(10, 0, 2, 17),
        };
        assert_eq!(
            resolve_request(&strings(&["10.0.0.3", "-", "10.0.2.17"]), false, &[]).unwrap(),
            expected
        );
        assert_eq!(
            resolve_request(&strings(&["10.0.0.3", "10.0.2.17"]), true, &[]).unwrap(),
            expected
        );
        assert_eq!(
            resolve_request(&strings(&["10.0.0.3"]), true, &[]).unwrap_err(),
            CalcError::MissingAddress2
        );
    }

    #[test]
    fn test_resolve_split() {
        assert_eq!(
            resolve_request(&strings(&["10.0.0.0/24"]), false, &[100, 50]).unwrap(),
            Request::Split {
                address: Ipv4Addr::new(10, 0, 0, 0),
                prefix: 24,
                capacities: vec![100, 50]
            }
        );
    }

    #[test]
    fn test_resolve_errors() {
        assert_eq!(
            resolve_request(&strings(&["10.0.0.256/24"]), false, &[]).unwrap_err(),
            CalcError::InvalidAddress("10.0.0.256".to_string())
        );
        assert_eq!(
            resolve_request(&strings(&["10.0.0.1", "255.0.255.0"]), false, &[]).unwrap_err(),
            CalcError::InvalidMask1("255.0.255.0".to_string())
        );
        assert!(resolve_request(&strings(&["fe80::1"]), false, &[]).is_err());
    }

    #[test]
    fn test_resolve_errors_name_the_argument() {
        let err = resolve_request(&strings(&["10.0.0.1/24", "33"]), false, &[]).unwrap_err();
        assert_eq!(err, CalcError::InvalidMask2("33".to_string()));
        assert_eq!(err.to_string(), "INVALID MASK2: 33");

        let err = resolve_request(&strings(&["10.0.0.1/40"]), false, &[]).unwrap_err();
        assert_eq!(err.to_string(), "INVALID MASK1: 40");

        let err = resolve_request(&strings(&["10.0.0.1", "-", "10.0.0"]), false, &[]).unwrap_err();
        assert_eq!(err, CalcError::InvalidAddress2("10.0.0".to_string()));
        assert_eq!(err.to_string(), "INVALID ADDRESS2: 10.0.0");

        let err = resolve_request(&strings(&["10.0.0.x", "-", "10.0.0.9"]), false, &[]).unwrap_err();
        assert_eq!(err.to_string(), "INVALID ADDRESS: 10.0.0.x");

        let err = resolve_request(&strings(&["10.0.0.1"]), true, &[]).unwrap_err();
        assert_eq!(err.to_string(), "INVALID ADDRESS2: missing");
    }

    #[test]
    fn test_execute_network_partition() {
        let request = resolve_request(&strings(&["192.168.0.0/24", "26"]), false, &[]).unwrap();
        let report = execute(&request, &CalcConfig::default()).unwrap();
        match report {
            Report::Network {
                info,
                target,
                partition: Some(Partition::Subnetting { subnet_count, .. }),
            } => {
                assert_eq!(info.network.to_string(), "192.168.0.0/24");
                assert_eq!(target, 26);
                assert_eq!(subnet_count, 4);
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_execute_same_mask_has_no_partition() {
        let request = resolve_request(&strings(&["192.168.0.9/24"]), false, &[]).unwrap();
        let report = execute(&request, &CalcConfig::default()).unwrap();
        assert!(matches!(report, Report::Network { partition: None, .. }));
    }

    #[test]
    fn test_execute_inverted_range() {
        let request = resolve_request(&strings(&["10.0.0.9", "-", "10.0.0.1"]), false, &[]).unwrap();
        assert!(matches!(
            execute(&request, &CalcConfig::default()),
            Err(CalcError::RangeInverted { .. })
        ));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["subnet-calc", "10.0.0.0/24", "-s", "10,20", "--json"]).unwrap();
        assert_eq!(args.split, vec![10, 20]);
        assert!(args.json);
        assert!(!args.use_color());

        let args = Args::try_parse_from(["subnet-calc", "10.0.0.1", "-", "10.0.0.9"]).unwrap();
        assert_eq!(args.args, strings(&["10.0.0.1", "-", "10.0.0.9"]));

        assert!(Args::try_parse_from(["subnet-calc", "10.0.0.1", "--color", "-n"]).is_err());
    }
}
