//! Test helpers and utilities

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tokio::task::JoinHandle;

use tokio_probes::{Liveness, ProbeReport, ProbeServer, Readiness, ServerConfig, Startup};

/// Probe set answering every probe type with a fixed report.
pub struct StaticProbes {
    pub liveness: ProbeReport,
    pub readiness: ProbeReport,
    pub startup: ProbeReport,
}

#[async_trait]
impl Liveness for StaticProbes {
    async fn liveness(&self) -> ProbeReport {
        self.liveness.clone()
    }
}

#[async_trait]
impl Readiness for StaticProbes {
    async fn readiness(&self) -> ProbeReport {
        self.readiness.clone()
    }
}

#[async_trait]
impl Startup for StaticProbes {
    async fn startup(&self) -> ProbeReport {
        self.startup.clone()
    }
}

/// Probe server running in-process on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
    /// Ephemeral-port configuration for in-process servers.
    pub fn config() -> ServerConfig {
        ServerConfig::new("127.0.0.1:0".parse().unwrap())
    }

    /// Bind the given probe server and serve it on a background task.
    pub async fn start(server: ProbeServer) -> Self {
        let bound = server.bind().await.expect("bind probe server");
        let addr = bound.local_addr();
        let handle = tokio::spawn(async move {
            let _ = bound.serve().await;
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            addr,
            client,
            handle,
        }
    }

    /// Server with the given probe set bound to the default paths.
    pub async fn with_probes(probes: StaticProbes) -> Self {
        Self::start(
            ProbeServer::new()
                .with_config(Self::config())
                .with_probes(probes),
        )
        .await
    }

    /// Make a GET request to the server.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("http://{}{}", self.addr, path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Make a POST request to the server.
    pub async fn post(&self, path: &str) -> Response {
        self.client
            .post(format!("http://{}{}", self.addr, path))
            .send()
            .await
            .expect("POST request failed")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
