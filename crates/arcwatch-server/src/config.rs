//! Server configuration.
//!
//! Everything is env-driven with sensible defaults; no config file.

use std::net::SocketAddr;
use std::time::Duration;

use arcwatch_provider::ScheduleConfig;

use crate::error::{ServerError, ServerResult};

/// Default bind address when neither `ARCWATCH_BIND` nor `PORT` is set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Configuration for the upstream schedule source.
    pub schedule: ScheduleConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("valid default address"),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Recognized variables:
    /// - `ARCWATCH_BIND`: full socket address (`host:port`)
    /// - `PORT`: port on 127.0.0.1 (ignored when `ARCWATCH_BIND` is set)
    /// - `ARCWATCH_SCHEDULE_URL`: upstream schedule endpoint
    /// - `ARCWATCH_FETCH_TIMEOUT_SECS`: outbound fetch timeout in seconds
    pub fn from_env() -> ServerResult<Self> {
        Self::from_vars(
            std::env::var("ARCWATCH_BIND").ok(),
            std::env::var("PORT").ok(),
            std::env::var("ARCWATCH_SCHEDULE_URL").ok(),
            std::env::var("ARCWATCH_FETCH_TIMEOUT_SECS").ok(),
        )
    }

    /// Builds the configuration from already-read variables.
    fn from_vars(
        bind: Option<String>,
        port: Option<String>,
        schedule_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> ServerResult<Self> {
        let bind_addr = match (bind, port) {
            (Some(addr), _) => addr
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid bind address: {}", addr)))?,
            (None, Some(port)) => {
                let port: u16 = port
                    .parse()
                    .map_err(|_| ServerError::Config(format!("invalid port: {}", port)))?;
                SocketAddr::from(([127, 0, 0, 1], port))
            }
            (None, None) => DEFAULT_BIND_ADDR.parse().expect("valid default address"),
        };

        let mut schedule = match schedule_url {
            Some(url) => ScheduleConfig::new(url),
            None => ScheduleConfig::default(),
        };

        if let Some(secs) = timeout_secs {
            let secs: u64 = secs
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid fetch timeout: {}", secs)))?;
            schedule = schedule.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            bind_addr,
            schedule,
        })
    }
}
