//! HTTP adapter for the probe contracts.
//!
//! Binds each probe to a GET endpoint and translates the outcome into a
//! wire response:
//!
//! | Result           | Status |
//! |------------------|--------|
//! | success, warning | 200    |
//! | failure          | 500    |
//!
//! The body is the report's diagnostic text, or empty when there is none,
//! regardless of the status. Probe bindings are established at construction
//! and never reconfigured afterwards; each request is stateless and
//! independent, so the server holds no locks and no cross-request state.
//!
//! The probe future is awaited inside the request future: if the client
//! disconnects before the probe completes, the probe future is dropped and
//! the check is cancelled at its next await point. No additional timeout is
//! imposed here; timeout policy belongs to the probe implementation or the
//! orchestrator's own request deadline.
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_probes::server::ProbeServer;
//!
//! let server = ProbeServer::new().with_probes(MyProbes::new());
//! server.run().await?;
//! ```

mod error;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming as IncomingBody;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{header, Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::probe::{
    Liveness, Probes, ProbeReport, Readiness, Startup, SuccessLiveness, SuccessReadiness,
    SuccessStartup,
};

pub use error::ServerError;

/// HTTP server exposing the three probe endpoints.
///
/// Holds one immutable binding per endpoint; endpoints left unbound serve
/// the success stubs.
pub struct ProbeServer {
    config: ServerConfig,
    liveness: Arc<dyn Liveness>,
    readiness: Arc<dyn Readiness>,
    startup: Arc<dyn Startup>,
}

impl Default for ProbeServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeServer {
    /// Server with default configuration and success stubs on every
    /// endpoint.
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            liveness: Arc::new(SuccessLiveness),
            readiness: Arc::new(SuccessReadiness),
            startup: Arc::new(SuccessStartup),
        }
    }

    /// Replace the server configuration.
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Bind one combined implementation to all three endpoints.
    pub fn with_probes<P: Probes + 'static>(mut self, probes: P) -> Self {
        let probes = Arc::new(probes);
        self.liveness = probes.clone();
        self.readiness = probes.clone();
        self.startup = probes;
        self
    }

    /// Bind the liveness endpoint.
    pub fn with_liveness(mut self, probe: impl Liveness + 'static) -> Self {
        self.liveness = Arc::new(probe);
        self
    }

    /// Bind the readiness endpoint.
    pub fn with_readiness(mut self, probe: impl Readiness + 'static) -> Self {
        self.readiness = Arc::new(probe);
        self
    }

    /// Bind the startup endpoint.
    pub fn with_startup(mut self, probe: impl Startup + 'static) -> Self {
        self.startup = Arc::new(probe);
        self
    }

    /// Bind the TCP listener without serving yet.
    ///
    /// Splitting bind from serve lets embedders discover the bound address
    /// (for example when configured with port 0) before requests arrive.
    pub async fn bind(self) -> Result<BoundProbeServer, ServerError> {
        let addr = self.config.listen_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|error| ServerError::Bind { addr, error })?;
        let local_addr = listener
            .local_addr()
            .map_err(|error| ServerError::Bind { addr, error })?;

        info!("probe server listening on {}", local_addr);

        Ok(BoundProbeServer {
            listener,
            local_addr,
            router: Arc::new(Router {
                liveness_path: self.config.liveness_path,
                readiness_path: self.config.readiness_path,
                startup_path: self.config.startup_path,
                liveness: self.liveness,
                readiness: self.readiness,
                startup: self.startup,
            }),
        })
    }

    /// Bind and serve until the accept loop fails.
    pub async fn run(self) -> Result<(), ServerError> {
        self.bind().await?.serve().await
    }
}

/// A probe server with its listener bound, ready to serve.
pub struct BoundProbeServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Arc<Router>,
}

impl BoundProbeServer {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until the accept loop fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serve until the shutdown future resolves or the accept loop fails.
    ///
    /// Shutdown only stops accepting; connections already accepted finish
    /// on their own tasks.
    pub async fn serve_with_shutdown(
        self,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), ServerError> {
        tokio::pin!(shutdown);

        loop {
            let (stream, _) = tokio::select! {
                accepted = self.listener.accept() => accepted.map_err(ServerError::Accept)?,
                _ = &mut shutdown => {
                    info!("probe server shutting down");
                    return Ok(());
                }
            };

            let _ = stream.set_nodelay(true);
            let router = Arc::clone(&self.router);

            tokio::spawn(async move {
                let service = service_fn(move |req: Request<IncomingBody>| {
                    let router = Arc::clone(&router);
                    async move { router.handle(req).await }
                });

                let io = TokioIo::new(stream);
                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    // Client disconnects land here; nothing actionable.
                    debug!("probe connection error: {}", err);
                }
            });
        }
    }
}

/// Immutable routing table: three paths, three probe bindings.
struct Router {
    liveness_path: String,
    readiness_path: String,
    startup_path: String,
    liveness: Arc<dyn Liveness>,
    readiness: Arc<dyn Readiness>,
    startup: Arc<dyn Startup>,
}

impl Router {
    async fn handle<B>(&self, req: Request<B>) -> Result<Response<Full<Bytes>>, http::Error> {
        let path = req.uri().path();

        let probe = if path == self.liveness_path {
            "liveness"
        } else if path == self.readiness_path {
            "readiness"
        } else if path == self.startup_path {
            "startup"
        } else {
            return Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Full::new(Bytes::new()));
        };

        if req.method() != Method::GET {
            return Response::builder()
                .status(StatusCode::METHOD_NOT_ALLOWED)
                .header(header::ALLOW, "GET")
                .body(Full::new(Bytes::new()));
        }

        let report = match probe {
            "liveness" => self.liveness.liveness().await,
            "readiness" => self.readiness.readiness().await,
            _ => self.startup.startup().await,
        };

        debug!(probe, result = %report.result, "probe evaluated");

        render(report)
    }
}

/// Translate a probe report into the wire response.
///
/// Failure maps to 500; everything else, including codes outside the three
/// members, maps to 200. The diagnostic, when present, becomes the
/// plaintext body independent of the status.
fn render(report: ProbeReport) -> Result<Response<Full<Bytes>>, http::Error> {
    let status = if report.result.is_failure() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    match report.diagnostic {
        Some(text) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(Full::new(Bytes::from(text))),
        None => Response::builder()
            .status(status)
            .body(Full::new(Bytes::new())),
    }
}
