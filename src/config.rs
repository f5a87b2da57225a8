//! Runtime configuration
//!
//! Read from the environment (and `.env` via dotenvy) once at startup.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::content::ContentSource;

pub const DEFAULT_RELAY_URL: &str = "https://formsubmit.co/ajax/info@elektrik220.km.ua";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration
///
/// | Env Var              | Default                                             |
/// |----------------------|-----------------------------------------------------|
/// | `HOST`               | `0.0.0.0`                                           |
/// | `PORT`               | `3000`                                              |
/// | `CONTENT_SOURCE`     | `content`                                           |
/// | `STATIC_DIR`         | `static`                                            |
/// | `QUOTE_RELAY_URL`    | `https://formsubmit.co/ajax/info@elektrik220.km.ua` |
/// | `RELAY_TIMEOUT_SECS` | `15`                                                |
/// | `MAPS_API_KEY`       | unset                                               |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub content_source: ContentSource,
    pub static_dir: PathBuf,
    pub relay_url: String,
    pub relay_timeout: Duration,
    /// Only used for the map embed on the contact page
    pub maps_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let host_raw = var("HOST", "0.0.0.0");
        let host = host_raw.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            expected: "an IP address",
            value: host_raw.clone(),
        })?;

        let port_raw = var("PORT", "3000");
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            expected: "a port number",
            value: port_raw.clone(),
        })?;

        let timeout_raw = var("RELAY_TIMEOUT_SECS", "15");
        let relay_timeout = timeout_raw
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| ConfigError::Invalid {
                name: "RELAY_TIMEOUT_SECS",
                expected: "a positive number of seconds",
                value: timeout_raw.clone(),
            })?;

        let maps_api_key = lookup("MAPS_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            host,
            port,
            content_source: ContentSource::parse(&var("CONTENT_SOURCE", "content")),
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            relay_url: var("QUOTE_RELAY_URL", DEFAULT_RELAY_URL),
            relay_timeout,
            maps_api_key,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
