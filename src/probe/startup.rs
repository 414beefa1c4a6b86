//! Startup probe contract.

use async_trait::async_trait;

use super::ProbeReport;

/// Answers the orchestrator's startup question: has initialization
/// completed?
///
/// Orchestrators hold off liveness and readiness evaluation until this
/// probe reports success or warning, which keeps slow-starting
/// applications from being killed mid-initialization. That gating happens
/// in the orchestrator; this crate only reports the state.
#[async_trait]
pub trait Startup: Send + Sync {
    /// Evaluate the startup probe.
    async fn startup(&self) -> ProbeReport;
}

/// Startup probe that always reports success with no diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessStartup;

#[async_trait]
impl Startup for SuccessStartup {
    async fn startup(&self) -> ProbeReport {
        ProbeReport::success()
    }
}
