//! Wireless Metrics Projector
//!
//! # Metrics Produced
//! - `bbox_wireless_{transmitted,received}_{bytes,packets,packets_errors,packets_discards}`
//!   - Labels: frequency (`24ghz`, `5ghz`)

use super::{first, project_traffic, MetricSet};
use crate::bbox::resources::WirelessMetrics;
use crate::error::Result;
use tracing::info;

pub fn project_wireless_metrics(metrics: &WirelessMetrics, set: &mut MetricSet) -> Result<()> {
    for band in &metrics.bands {
        info!("Store wireless {} metrics", band.band.label());
        let stats = &first(&band.statistics, band.band.stats_path())?
            .wireless
            .ssid
            .stats;
        project_traffic(
            set,
            "bbox_wireless",
            &[("frequency", band.band.label())],
            stats,
            &format!("wireless.{}.ssid.stats", band.band.code()),
            false,
        );
    }
    Ok(())
}
