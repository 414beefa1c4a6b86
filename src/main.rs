//! Standalone probe server with the success stubs bound to every endpoint.
//!
//! Configured entirely from the environment: `LISTEN_ADDR`,
//! `LIVENESS_PATH`, `READINESS_PATH`, `STARTUP_PATH`, `LOG_LEVEL`,
//! `LOG_JSON`, `SERVICE_NAME`.

use tracing::info;

use tokio_probes::{logging, Config, ProbeServer, SuccessProbes};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;
    logging::init(&config.logging);
    config.log_summary();

    info!("Starting tokio_probes server...");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let server = ProbeServer::new()
        .with_config(config.server)
        .with_probes(SuccessProbes::new());

    let bound = server.bind().await?;

    tokio::select! {
        result = bound.serve() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
    }

    Ok(())
}
