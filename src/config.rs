// Server configuration from environment variables
//
// Read once at startup. Malformed values fall back to the default with a
// warning rather than aborting.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Upper bound for `CACHE_TTL_SECS` (one year); moka rejects very long TTLs
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Time-to-live for memoized suitability responses
    pub cache_ttl: Duration,
    /// Maximum number of memoized responses
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            cache_ttl: Duration::from_secs(300), // 5 min TTL
            cache_capacity: 10_000,
        }
    }
}

impl ServerConfig {
    /// Load from `BIND_ADDR`, `PORT`, `CACHE_TTL_SECS` and `CACHE_CAPACITY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mut cache_ttl = Duration::from_secs(parse_or_default(
            &lookup,
            "CACHE_TTL_SECS",
            defaults.cache_ttl.as_secs(),
        ));
        if cache_ttl > MAX_CACHE_TTL {
            tracing::warn!(
                "CACHE_TTL_SECS={} exceeds the maximum, using {}",
                cache_ttl.as_secs(),
                MAX_CACHE_TTL.as_secs()
            );
            cache_ttl = MAX_CACHE_TTL;
        }

        Self {
            bind_addr: parse_or_default(&lookup, "BIND_ADDR", defaults.bind_addr),
            port: parse_or_default(&lookup, "PORT", defaults.port),
            cache_ttl,
            cache_capacity: parse_or_default(&lookup, "CACHE_CAPACITY", defaults.cache_capacity),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("CACHE_TTL_SECS", "60"),
            ("CACHE_CAPACITY", "50"),
        ]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.cache_capacity, 50);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("CACHE_CAPACITY", "-5")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.cache_capacity, 10_000);
    }

    #[test]
    fn test_cache_ttl_is_clamped() {
        let config = config_from(&[("CACHE_TTL_SECS", "99999999999")]);
        assert_eq!(config.cache_ttl, MAX_CACHE_TTL);

        let max = MAX_CACHE_TTL.as_secs().to_string();
        let config = config_from(&[("CACHE_TTL_SECS", max.as_str())]);
        assert_eq!(config.cache_ttl, MAX_CACHE_TTL);
    }
}
