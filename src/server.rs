//! HTTP Server
//!
//! This module implements the Prometheus exporter HTTP surface.
//!
//! # Architecture
//!
//! - **HTTP Server**: Axum-based server exposing the metrics path, `/health`, `/ready` and `/`
//! - **Scrape-driven collection**: there is no background loop; every request
//!   to the metrics path runs one collection cycle against the Bbox
//! - **State Management**: the [`Exporter`] is shared behind an `Arc`
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET <metrics_path>` - Prometheus metrics in text format (default `/metrics`)
//! - `GET /health` - Liveness probe, always 200
//! - `GET /ready` - Readiness probe, always 200
//!
//! # Error Handling
//!
//! A failed collection cycle is not an HTTP error: the scrape still succeeds
//! and reports `bbox_up 0`. Only a failure to render the registry returns 500.

use crate::config::Config;
use crate::exporter::Exporter;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
struct AppState {
    exporter: Arc<Exporter>,
    metrics_path: Arc<str>,
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let endpoint = config.validate()?;
    let exporter = Arc::new(Exporter::new(&config.bbox, endpoint)?);

    let app = router(exporter, &config.server.metrics_path);

    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Metrics server listening on {}", addr);
    info!(
        "Metrics available at http://{}{}",
        addr, config.server.metrics_path
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router around an exporter
pub fn router(exporter: Arc<Exporter>, metrics_path: &str) -> Router {
    let state = AppState {
        exporter,
        metrics_path: Arc::from(metrics_path),
    };

    Router::new()
        .route("/", get(root_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health", get(probe_handler))
        .route("/ready", get(probe_handler))
        .with_state(state)
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        r#"<html>
<head><title>Bbox Exporter</title></head>
<body>
<h1>Bbox Prometheus Exporter</h1>
<p><a href="{}">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#,
        state.metrics_path
    ))
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.exporter.scrape().await {
        Ok(metrics) => metrics.into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn probe_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
