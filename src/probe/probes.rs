//! Combined probe contract.

use async_trait::async_trait;

use super::{
    Liveness, ProbeReport, Readiness, Startup, SuccessLiveness, SuccessReadiness, SuccessStartup,
};

/// One implementation answering all three probe types.
///
/// Blanket-implemented for any type that satisfies [`Liveness`],
/// [`Readiness`] and [`Startup`]. Use it to hand a single object to
/// [`ProbeServer::with_probes`](crate::server::ProbeServer::with_probes)
/// instead of binding three separate implementations.
pub trait Probes: Liveness + Readiness + Startup {}

impl<T: Liveness + Readiness + Startup + ?Sized> Probes for T {}

/// Probe set that reports success for every probe type, composed of
/// [`SuccessLiveness`], [`SuccessReadiness`] and [`SuccessStartup`].
///
/// The fallback binding when the embedding application has no real health
/// logic to report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessProbes {
    liveness: SuccessLiveness,
    readiness: SuccessReadiness,
    startup: SuccessStartup,
}

impl SuccessProbes {
    /// Probe set composed of the three success stubs.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Liveness for SuccessProbes {
    async fn liveness(&self) -> ProbeReport {
        self.liveness.liveness().await
    }
}

#[async_trait]
impl Readiness for SuccessProbes {
    async fn readiness(&self) -> ProbeReport {
        self.readiness.readiness().await
    }
}

#[async_trait]
impl Startup for SuccessProbes {
    async fn startup(&self) -> ProbeReport {
        self.startup.startup().await
    }
}
