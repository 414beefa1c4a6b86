//! Probe endpoint tests: status mapping, bodies, paths, methods.

use async_trait::async_trait;
use reqwest::StatusCode;

use tokio_probes::{ProbeReport, ProbeServer, Readiness};

use crate::helpers::{StaticProbes, TestServer};

fn all_success() -> StaticProbes {
    StaticProbes {
        liveness: ProbeReport::success(),
        readiness: ProbeReport::success(),
        startup: ProbeReport::success(),
    }
}

/// Unconfigured probes answer 200 with an empty body on all three
/// endpoints.
#[tokio::test]
async fn test_default_probes_all_endpoints() {
    let server = TestServer::start(ProbeServer::new().with_config(TestServer::config())).await;

    for path in ["/liveness", "/readiness", "/startup"] {
        let resp = server.get(path).await;
        assert_eq!(
            resp.status(),
            StatusCode::OK,
            "unexpected status for {}",
            path
        );
        assert_eq!(
            resp.text().await.unwrap(),
            "",
            "unexpected body for {}",
            path
        );
    }
}

/// Liveness success without a diagnostic: 200, empty body.
#[tokio::test]
async fn test_liveness_success_no_diagnostic() {
    let server = TestServer::with_probes(all_success()).await;

    let resp = server.get("/liveness").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "");
}

/// Liveness warning keeps the instance healthy but surfaces the
/// diagnostic in the body.
#[tokio::test]
async fn test_liveness_warning_with_diagnostic() {
    let server = TestServer::with_probes(StaticProbes {
        liveness: ProbeReport::warning().with_diagnostic("disk at 90%"),
        ..all_success()
    })
    .await;

    let resp = server.get("/liveness").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "disk at 90%");
}

/// Readiness failure without a diagnostic: 500, empty body.
#[tokio::test]
async fn test_readiness_failure_empty_body() {
    let server = TestServer::with_probes(StaticProbes {
        readiness: ProbeReport::failure(),
        ..all_success()
    })
    .await;

    let resp = server.get("/readiness").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "");
}

/// Readiness failure with a diagnostic: 500 with the diagnostic text.
#[tokio::test]
async fn test_readiness_failure_with_diagnostic() {
    let server = TestServer::with_probes(StaticProbes {
        readiness: ProbeReport::failure().with_diagnostic("db unreachable"),
        ..all_success()
    })
    .await;

    let resp = server.get("/readiness").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "db unreachable");
}

/// Startup success: 200, empty body.
#[tokio::test]
async fn test_startup_success() {
    let server = TestServer::with_probes(all_success()).await;

    let resp = server.get("/startup").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "");
}

/// A diagnostic on a success report shows up in the body without
/// changing the status.
#[tokio::test]
async fn test_success_with_diagnostic_keeps_200() {
    let server = TestServer::with_probes(StaticProbes {
        startup: ProbeReport::success().with_diagnostic("migrations applied"),
        ..all_success()
    })
    .await;

    let resp = server.get("/startup").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "migrations applied");
}

/// Paths are overridable at construction; the defaults disappear.
#[tokio::test]
async fn test_custom_paths() {
    let config = TestServer::config()
        .with_liveness_path("/healthz")
        .with_readiness_path("/readyz")
        .with_startup_path("/startupz");
    let server = TestServer::start(ProbeServer::new().with_config(config)).await;

    assert_eq!(server.get("/healthz").await.status(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status(), StatusCode::OK);
    assert_eq!(server.get("/startupz").await.status(), StatusCode::OK);

    assert_eq!(
        server.get("/liveness").await.status(),
        StatusCode::NOT_FOUND
    );
}

/// Unregistered paths answer 404.
#[tokio::test]
async fn test_unknown_path_is_404() {
    let server = TestServer::with_probes(all_success()).await;

    let resp = server.get("/metrics").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "");
}

/// Probe endpoints only accept GET.
#[tokio::test]
async fn test_post_is_rejected() {
    let server = TestServer::with_probes(all_success()).await;

    let resp = server.post("/liveness").await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers()["allow"], "GET");
}

struct FailingReadiness;

#[async_trait]
impl Readiness for FailingReadiness {
    async fn readiness(&self) -> ProbeReport {
        ProbeReport::failure().with_diagnostic("warming up")
    }
}

/// Endpoints can be bound to separate implementations; the others keep
/// the success stubs.
#[tokio::test]
async fn test_separate_probe_bindings() {
    let server = TestServer::start(
        ProbeServer::new()
            .with_config(TestServer::config())
            .with_readiness(FailingReadiness),
    )
    .await;

    assert_eq!(server.get("/liveness").await.status(), StatusCode::OK);
    assert_eq!(server.get("/startup").await.status(), StatusCode::OK);

    let resp = server.get("/readiness").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "warming up");
}
