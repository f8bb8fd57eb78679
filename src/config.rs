//! Server configuration parsed from environment variables.
//!
//! The Leptos `site-addr` is the baseline; `HOST` and `PORT` override its
//! parts so deployments can bind without editing `Cargo.toml`.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid HOST: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, default from `site_addr`
    /// - `PORT`: bind port, default from `site_addr`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either variable is set but unparseable.
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), site_addr)
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, site_addr: SocketAddr) -> Result<Self, ConfigError> {
        let mut addr = site_addr;
        if let Some(raw) = lookup("HOST") {
            let ip: IpAddr = raw.trim().parse().map_err(|_| ConfigError::InvalidHost(raw.clone()))?;
            addr.set_ip(ip);
        }
        if let Some(raw) = lookup("PORT") {
            let port: u16 = raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
            addr.set_port(port);
        }
        Ok(Self { addr })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
