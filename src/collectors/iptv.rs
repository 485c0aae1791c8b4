//! IPTV Metrics Projector
//!
//! # Metrics Produced
//! - `bbox_iptv_channel_received` - 1 when the channel stream is received
//!   - Labels: name, address (multicast group, unique per channel)
//! - `bbox_iptv_channels` - Number of channels listed
//!
//! The `/iptv` response is walked as a whole; an empty channel list is a
//! valid state (no set-top box watching) and yields `bbox_iptv_channels 0`.

use super::MetricSet;
use crate::bbox::resources::IptvMetrics;
use crate::error::Result;
use tracing::info;

pub fn project_iptv_metrics(metrics: &IptvMetrics, set: &mut MetricSet) -> Result<()> {
    info!("Store IPTV metrics");

    let mut channels = 0usize;
    for channel in metrics.informations.iter().flat_map(|info| &info.iptv) {
        channels += 1;
        let name = if channel.name.is_empty() {
            channel.address.as_str()
        } else {
            channel.name.as_str()
        };
        set.set_field(
            "bbox_iptv_channel_received",
            &[("name", name), ("address", channel.address.as_str())],
            &channel.receipt,
            &format!("iptv.{}.receipt", name),
        );
    }
    set.set("bbox_iptv_channels", &[], channels as f64);

    Ok(())
}
