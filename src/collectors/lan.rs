//! LAN Metrics Projector
//!
//! # Metrics Produced
//! - `bbox_lan_{transmitted,received}_{bytes,packets,packets_errors,packets_discards}`
//! - `bbox_lan_connected_devices` - Active hosts, summed per physical link
//!   - Labels: link
//! - `bbox_lan_switch_port_up` - 1 when the switch port reports "Up"
//!   - Labels: port

use super::{first, link_state_value, project_traffic, MetricSet};
use crate::bbox::resources::LanMetrics;
use crate::bbox::types::LanHost;
use crate::error::Result;
use tracing::info;

/// Active host count per link. Inactive hosts are not counted and a link with
/// no active host gets no sample.
fn count_active_hosts(set: &mut MetricSet, hosts: &[LanHost]) {
    for host in hosts.iter().filter(|host| host.active.is_positive()) {
        let link = if host.link.is_empty() {
            "unknown"
        } else {
            host.link.as_str()
        };
        set.add("bbox_lan_connected_devices", &[("link", link)], 1.0);
    }
}

pub fn project_lan_metrics(metrics: &LanMetrics, set: &mut MetricSet) -> Result<()> {
    info!("Store LAN metrics");

    let stats = &first(&metrics.statistics, "/lan/stats")?.lan.stats;
    project_traffic(set, "bbox_lan", &[], stats, "lan.stats", false);

    let hosts = &first(&metrics.devices, "/hosts")?.hosts.list;
    count_active_hosts(set, hosts);

    let switch = &first(&metrics.ip_informations, "/lan/ip")?.lan.switch;
    for (index, port) in switch.ports.iter().enumerate() {
        // ports without an id are numbered by position, starting at 1
        let id = port.id.value().unwrap_or((index + 1) as f64).to_string();
        set.set(
            "bbox_lan_switch_port_up",
            &[("port", id.as_str())],
            link_state_value(&port.state),
        );
    }

    Ok(())
}
