//! Readiness probe contract.

use async_trait::async_trait;

use super::ProbeReport;

/// Answers the orchestrator's readiness question: should traffic be routed
/// to this instance?
///
/// A [`failure`](ProbeReport::failure) report removes the instance from the
/// load-balancing rotation; success and warning keep it receiving traffic.
#[async_trait]
pub trait Readiness: Send + Sync {
    /// Evaluate the readiness probe.
    async fn readiness(&self) -> ProbeReport;
}

/// Readiness probe that always reports success with no diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessReadiness;

#[async_trait]
impl Readiness for SuccessReadiness {
    async fn readiness(&self) -> ProbeReport {
        ProbeReport::success()
    }
}
