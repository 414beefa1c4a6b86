//! Kubernetes probe contracts and the result model.
//!
//! Three independent capability traits, one per probe type:
//! - [`Liveness`]: is the process alive? (restart container if failed)
//! - [`Readiness`]: can the service handle traffic? (remove from LB if failed)
//! - [`Startup`]: has initialization completed? (wait before other probes)
//!
//! Each returns a [`ProbeReport`]: a tri-state [`ProbeResult`] plus an
//! optional diagnostic string. The [`Probes`] trait combines the three for
//! applications that answer every probe type from one object, and the
//! `Success*` stubs cover applications with no real health logic.
//!
//! # Kubernetes Integration
//!
//! ```yaml
//! livenessProbe:
//!   httpGet:
//!     path: /liveness
//!     port: 9000
//!   periodSeconds: 10
//!
//! readinessProbe:
//!   httpGet:
//!     path: /readiness
//!     port: 9000
//!   periodSeconds: 5
//!
//! startupProbe:
//!   httpGet:
//!     path: /startup
//!     port: 9000
//!   failureThreshold: 30
//!   periodSeconds: 2
//! ```

mod liveness;
mod probes;
mod readiness;
mod result;
mod startup;

pub use liveness::{Liveness, SuccessLiveness};
pub use probes::{Probes, SuccessProbes};
pub use readiness::{Readiness, SuccessReadiness};
pub use result::{ProbeReport, ProbeResult, UnsupportedResult};
pub use startup::{Startup, SuccessStartup};
