// config.rs
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_INSURANCE_API_BASE: &str = "https://homerates.honestpolicy.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Bound on the listing page fetch.
    pub fetch_timeout: Duration,
    pub insurance_base_url: String,
    /// Partner credential for the rate service. Without it insurance stays 0.
    pub insurance_api_key: Option<String>,
    pub insurance_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_workers: 8,
            fetch_timeout: Duration::from_secs(30),
            insurance_base_url: DEFAULT_INSURANCE_API_BASE.to_string(),
            insurance_api_key: None,
            insurance_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    /// Read the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let secs = |var: &'static str, default: Duration| {
            parse_or(&lookup, var, default.as_secs()).map(Duration::from_secs)
        };

        Ok(Self {
            bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr)?,
            max_workers: parse_or(&lookup, "MAX_WORKERS", defaults.max_workers)?,
            fetch_timeout: secs("FETCH_TIMEOUT_SECS", defaults.fetch_timeout)?,
            insurance_base_url: lookup("INSURANCE_API_BASE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.insurance_base_url),
            insurance_api_key: lookup("INSURANCE_API_KEY").filter(|v| !v.trim().is_empty()),
            insurance_timeout: secs("INSURANCE_TIMEOUT_SECS", defaults.insurance_timeout)?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
