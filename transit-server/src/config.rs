//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Path to the JSON schedule snapshot. Required.
pub const SCHEDULE_PATH_VAR: &str = "TRANSIT_SCHEDULE_PATH";

/// Address to listen on.
pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";

/// Seconds between schedule reloads. Unset or 0 disables reloading.
pub const RELOAD_SECS_VAR: &str = "TRANSIT_RELOAD_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error reading server configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// JSON schedule snapshot to load at startup
    pub schedule_path: PathBuf,

    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// How often to reload the snapshot, if at all
    pub reload_interval: Option<Duration>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let schedule_path = lookup(SCHEDULE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(SCHEDULE_PATH_VAR))?;

        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let reload_interval = match lookup(RELOAD_SECS_VAR) {
            None => None,
            Some(value) => {
                let secs: u64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                            var: RELOAD_SECS_VAR,
                            value: value.clone(),
                            reason: e.to_string(),
                        })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
        };

        Ok(Self {
            schedule_path,
            bind_addr,
            reload_interval,
        })
    }
}
