//! Server configuration from environment variables
//!
//! - `PORT` (default 3000)
//! - `BIND_ADDR` (default 0.0.0.0)
//! - `SECTIONS_FILE` JSON section registry, built-in catalog when unset
//! - `PAGE_CACHE_CAPACITY` (default 1000 pages)
//! - `PAGE_CACHE_TTL_SECS` (default 300)

use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub sections_file: Option<PathBuf>,
    pub page_cache_capacity: u64,
    pub page_cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            sections_file: None,
            page_cache_capacity: 1_000,
            page_cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_or(get("BIND_ADDR"), "BIND_ADDR", defaults.bind_addr)?,
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            sections_file: get("SECTIONS_FILE").map(PathBuf::from),
            page_cache_capacity: parse_or(
                get("PAGE_CACHE_CAPACITY"),
                "PAGE_CACHE_CAPACITY",
                defaults.page_cache_capacity,
            )?,
            page_cache_ttl: Duration::from_secs(parse_or(
                get("PAGE_CACHE_TTL_SECS"),
                "PAGE_CACHE_TTL_SECS",
                defaults.page_cache_ttl.as_secs(),
            )?),
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
