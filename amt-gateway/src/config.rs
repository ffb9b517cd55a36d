//! Gateway configuration.
//!
//! Everything the gateway needs at startup is read once from the environment
//! into a [`GatewayConfig`] and handed to the router and upstream client.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::upstream::UpstreamConfig;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5555;

/// Default inbound request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default directory for the web client.
pub const DEFAULT_STATIC_DIR: &str = "www";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but unusable
    #[error("invalid {var}={value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Startup configuration for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Address to listen on
    pub bind_addr: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Upstream endpoints and timeout
    pub upstream: UpstreamConfig,

    /// Inbound request timeout in seconds
    pub request_timeout_secs: u64,

    /// Directory served for non-API paths
    pub static_dir: PathBuf,

    /// Serve fixtures from this directory instead of the live site
    pub mock_upstream_dir: Option<PathBuf>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            upstream: UpstreamConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            mock_upstream_dir: None,
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mut upstream = defaults.upstream;
        if let Some(url) = lookup("AMT_STOP_URL") {
            upstream = upstream.with_stop_url(url);
        }
        if let Some(url) = lookup("AMT_LINE_URL") {
            upstream = upstream.with_line_url(url);
        }
        if let Some(secs) = parse_var(&lookup, "UPSTREAM_TIMEOUT_SECS")? {
            upstream = upstream.with_timeout(secs);
        }

        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            upstream,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            mock_upstream_dir: lookup("MOCK_UPSTREAM_DIR").map(PathBuf::from),
        })
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Inbound request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parse an optional variable, rejecting values that do not parse.
fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value,
            reason: e.to_string(),
        })
}
