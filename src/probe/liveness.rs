//! Liveness probe contract.

use async_trait::async_trait;

use super::ProbeReport;

/// Answers the orchestrator's liveness question: should this instance be
/// restarted?
///
/// Applications accumulate faults that only a restart clears. A
/// [`failure`](ProbeReport::failure) report tells the orchestrator to
/// restart the container; success and warning leave it running.
///
/// Cancellation: the returned future is dropped when the requesting client
/// disconnects, so long-running checks observe cancellation at their await
/// points.
#[async_trait]
pub trait Liveness: Send + Sync {
    /// Evaluate the liveness probe.
    async fn liveness(&self) -> ProbeReport;
}

/// Liveness probe that always reports success with no diagnostic, for
/// applications that have no real liveness logic to report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessLiveness;

#[async_trait]
impl Liveness for SuccessLiveness {
    async fn liveness(&self) -> ProbeReport {
        ProbeReport::success()
    }
}
