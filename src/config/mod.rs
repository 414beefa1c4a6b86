//! Configuration module for tokio_probes.
//!
//! Centralized configuration loading from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_probes::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Listen address: {}", config.server.listen_addr);
//! println!("Liveness path: {}", config.server.liveness_path);
//! ```

mod error;
mod logging;
mod parse;
mod server;

pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use server::{
    ServerConfig, DEFAULT_LISTEN_ADDR, DEFAULT_LIVENESS_PATH, DEFAULT_READINESS_PATH,
    DEFAULT_STARTUP_PATH,
};

/// Complete application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Probe server configuration.
    pub server: ServerConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Listen: {}", self.server.listen_addr);
        info!("  Liveness path: {}", self.server.liveness_path);
        info!("  Readiness path: {}", self.server.readiness_path);
        info!("  Startup path: {}", self.server.startup_path);
        info!("  Log filter: {}", self.logging.filter);

        if self.logging.json {
            info!("  Log format: json");
        }
    }
}
