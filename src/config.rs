//! Runtime configuration.
//!
//! Only presentation limits live here; every calculation takes its inputs as
//! explicit arguments.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`CalcConfig::max_subnets`].
pub const MAX_SUBNETS_ENV: &str = "SUBNET_CALC_MAX_SUBNETS";

/// Default number of subnets listed before the listing is cut short.
pub const DEFAULT_MAX_SUBNETS: usize = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    /// Upper bound on enumerated child subnets. Totals are still exact past it.
    pub max_subnets: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            max_subnets: DEFAULT_MAX_SUBNETS,
        }
    }
}

impl CalcConfig {
    /// Build a config from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CalcConfig::default();
        if let Some(raw) = lookup(MAX_SUBNETS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => {
                    log::debug!("{MAX_SUBNETS_ENV}={limit}");
                    config.max_subnets = limit;
                }
                Err(e) => log::warn!(
                    "Ignoring {MAX_SUBNETS_ENV}={raw:?} ({e}), using {}",
                    config.max_subnets
                ),
            }
        }
        config
    }

    /// Replace the subnet limit when one was given explicitly.
    pub fn with_max_subnets(mut self, max_subnets: Option<usize>) -> Self {
        if let Some(limit) = max_subnets {
            self.max_subnets = limit;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(CalcConfig::default().max_subnets, 1000);
    }

    #[test]
    fn test_from_lookup() {
        let config = CalcConfig::from_lookup(|_| Some("64".to_string()));
        assert_eq!(config.max_subnets, 64);

        let config = CalcConfig::from_lookup(|_| Some("lots".to_string()));
        assert_eq!(config.max_subnets, DEFAULT_MAX_SUBNETS);

        let config = CalcConfig::from_lookup(|_| None);
        assert_eq!(config, CalcConfig::default());
    }

    #[test]
    fn test_with_max_subnets() {
        let config = CalcConfig::default().with_max_subnets(Some(5));
        assert_eq!(config.max_subnets, 5);
        let config = config.with_max_subnets(None);
        assert_eq!(config.max_subnets, 5);
    }
}
