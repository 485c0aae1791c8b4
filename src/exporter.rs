//! Collection Cycle
//!
//! Ties the device client, the projector and the metric registry together.
//! One scrape runs exactly one cycle:
//!
//! 1. Log in and fetch every resource group ([`BboxClient::collect_snapshot`])
//! 2. Project the snapshot into a [`MetricSet`] ([`collectors::project`])
//! 3. Publish the whole set with `bbox_up 1`, or only `bbox_up 0` on any failure
//!
//! Cycles are serialised: a scrape arriving while another is in flight waits
//! for it, so the session cookies are written once per cycle.

use crate::bbox::{BboxClient, Endpoint, WirelessBand};
use crate::collectors::{self, MetricSet};
use crate::config::BboxConfig;
use crate::error::{ExporterError, Result};
use crate::metrics::BboxMetrics;
use secrecy::SecretString;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct Exporter {
    client: BboxClient,
    metrics: BboxMetrics,
    password: SecretString,
    bands: Vec<WirelessBand>,
    cycle: Mutex<()>,
}

impl Exporter {
    pub fn new(config: &BboxConfig, endpoint: Endpoint) -> Result<Self> {
        info!("Setup Bbox exporter using URL: {}", endpoint.as_url());
        let client = BboxClient::new(endpoint, config.verify_ssl)?;
        Self::with_client(client, config.password.clone(), config.wireless_bands.clone())
    }

    pub fn with_client(
        client: BboxClient,
        password: SecretString,
        bands: Vec<WirelessBand>,
    ) -> Result<Self> {
        let metrics = BboxMetrics::new().map_err(|e| ExporterError::Metrics(e.to_string()))?;
        Ok(Self {
            client,
            metrics,
            password,
            bands,
            cycle: Mutex::new(()),
        })
    }

    pub fn metrics(&self) -> &BboxMetrics {
        &self.metrics
    }

    /// Authenticate, fetch and project, without touching the registry
    pub async fn collect(&self) -> Result<MetricSet> {
        let snapshot = self
            .client
            .collect_snapshot(&self.password, &self.bands)
            .await?;
        collectors::project(&snapshot)
    }

    /// Run one collection cycle and publish its outcome.
    ///
    /// Returns the error that marked the exporter down, if any. The error is
    /// already logged.
    pub async fn run_cycle(&self) -> Result<()> {
        let _guard = self.cycle.lock().await;
        info!("Bbox exporter starting");

        let outcome = match self.collect().await {
            Ok(samples) => self.metrics.publish(&samples),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                info!("Bbox exporter finished");
                Ok(())
            }
            Err(e) => {
                error!("Bbox error: {}", e);
                self.metrics.mark_down();
                Err(e)
            }
        }
    }

    /// Run a cycle and render the registry, whatever the cycle's outcome
    pub async fn scrape(&self) -> anyhow::Result<String> {
        // A failed cycle is still a valid scrape: it renders `bbox_up 0`
        let _ = self.run_cycle().await;
        self.metrics.render()
    }
}
