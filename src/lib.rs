//! tokio_probes - Kubernetes probe endpoints served over HTTP.
//!
//! This crate wires application-supplied health checks to the three probe
//! endpoints a container orchestrator polls: liveness, readiness and
//! startup. The embedding application implements the probe traits; the
//! crate answers each GET with a status code derived from the probe's
//! tri-state result and a body carrying its optional diagnostic.
//!
//! # Features
//!
//! - **Probe contracts**: [`Liveness`], [`Readiness`] and [`Startup`]
//!   capability traits, plus [`Probes`] for one object answering all three
//! - **Fixed status mapping**: success/warning map to 200 OK, failure to
//!   500 Internal Server Error
//! - **Plaintext diagnostics**: the report's diagnostic becomes the
//!   response body, independent of the status
//! - **Env configuration**: listen address and probe paths from
//!   environment variables, overridable in code
//! - **Structured logging**: tracing with optional line-JSON output
//!
//! # Example
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use tokio_probes::{ProbeReport, ProbeServer, Readiness};
//!
//! struct AppReadiness {
//!     pool: DbPool,
//! }
//!
//! #[async_trait]
//! impl Readiness for AppReadiness {
//!     async fn readiness(&self) -> ProbeReport {
//!         match self.pool.ping().await {
//!             Ok(()) => ProbeReport::success(),
//!             Err(err) => ProbeReport::failure().with_diagnostic(err.to_string()),
//!         }
//!     }
//! }
//!
//! // Liveness and startup fall back to the success stubs.
//! let server = ProbeServer::new().with_readiness(AppReadiness { pool });
//! server.run().await?;
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod logging;
pub mod probe;
pub mod server;

// Re-exports for convenience
pub use config::{Config, ServerConfig};
pub use probe::{
    Liveness, ProbeReport, ProbeResult, Probes, Readiness, Startup, SuccessLiveness,
    SuccessProbes, SuccessReadiness, SuccessStartup, UnsupportedResult,
};
pub use server::{BoundProbeServer, ProbeServer, ServerError};
