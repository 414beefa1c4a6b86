//! Probe server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::parse::{env_or, env_parse};
use super::ConfigError;

/// Default listen address for the probe endpoints.
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 9000);

/// Default path for the liveness endpoint.
pub const DEFAULT_LIVENESS_PATH: &str = "/liveness";

/// Default path for the readiness endpoint.
pub const DEFAULT_READINESS_PATH: &str = "/readiness";

/// Default path for the startup endpoint.
pub const DEFAULT_STARTUP_PATH: &str = "/startup";

/// Probe server configuration.
///
/// Fixed at construction; the server never reconfigures paths or the
/// listen address at runtime.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the probe listener binds to.
    pub listen_addr: SocketAddr,
    /// Path serving the liveness probe.
    pub liveness_path: String,
    /// Path serving the readiness probe.
    pub readiness_path: String,
    /// Path serving the startup probe.
    pub startup_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
            liveness_path: DEFAULT_LIVENESS_PATH.to_string(),
            readiness_path: DEFAULT_READINESS_PATH.to_string(),
            startup_path: DEFAULT_STARTUP_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    /// Configuration with the given listen address and default paths.
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            ..Self::default()
        }
    }

    /// Override the liveness path.
    pub fn with_liveness_path(mut self, path: impl Into<String>) -> Self {
        self.liveness_path = path.into();
        self
    }

    /// Override the readiness path.
    pub fn with_readiness_path(mut self, path: impl Into<String>) -> Self {
        self.readiness_path = path.into();
        self
    }

    /// Override the startup path.
    pub fn with_startup_path(mut self, path: impl Into<String>) -> Self {
        self.startup_path = path.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Keys: `LISTEN_ADDR`, `LIVENESS_PATH`, `READINESS_PATH`,
    /// `STARTUP_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = env_parse("LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;
        let config = Self::new(listen_addr)
            .with_liveness_path(env_or("LIVENESS_PATH", DEFAULT_LIVENESS_PATH))
            .with_readiness_path(env_or("READINESS_PATH", DEFAULT_READINESS_PATH))
            .with_startup_path(env_or("STARTUP_PATH", DEFAULT_STARTUP_PATH));
        config.validate()?;
        Ok(config)
    }

    /// Check that every probe path is absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, path) in [
            ("LIVENESS_PATH", &self.liveness_path),
            ("READINESS_PATH", &self.readiness_path),
            ("STARTUP_PATH", &self.startup_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Invalid {
                    key: key.to_string(),
                    message: format!("probe path must start with '/', got '{}'", path),
                });
            }
        }
        Ok(())
    }
}
