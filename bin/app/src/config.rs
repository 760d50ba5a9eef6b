//! Static server configuration.
//!
//! Loaded via the `config` crate from `HASHNAV_*` environment variables:
//!
//! - `HASHNAV_ADDR`: socket address to listen on (default `127.0.0.1:8080`)
//! - `HASHNAV_SITE_ROOT`: directory holding the built site (default `dist`)

use config::{ConfigError, Environment};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Configuration for the `hashnav-serve` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct ServeConfig {
    /// Address to listen on.
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,

    /// Directory served as the site root.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
}

fn default_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 8080))
}

fn default_site_root() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_root: default_site_root(),
        }
    }
}

impl ServeConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("HASHNAV"))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
