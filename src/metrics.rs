//! Prometheus Metrics Definitions
//!
//! This module defines every Prometheus metric exposed by the Bbox exporter.
//!
//! # Metric Categories
//!
//! ## Device
//! - Status, boot count and temperature
//! - Memory and CPU time
//! - Access technologies in use
//!
//! ## Network
//! - WAN traffic, line occupation, link and FTTH state, diagnostics
//! - LAN traffic, connected devices and switch ports
//! - Wireless traffic per frequency band
//!
//! ## Services
//! - Enabled/status/rule count per router feature
//! - DNS query statistics
//! - IPTV channel reception
//!
//! # Metric Types
//!
//! - **Gauge**: `bbox_up`, the availability of the last collection cycle
//! - **GaugeVec**: everything else, including label-less series (an empty
//!   label list) so every series can be cleared with a single `reset()`
//!
//! All metrics use the `bbox_` namespace prefix.
//!
//! # Publication
//!
//! Metrics are never updated piecemeal. A collection cycle produces a complete
//! [`MetricSet`], and [`BboxMetrics::publish`] swaps it in as a whole. A failed
//! cycle calls [`BboxMetrics::mark_down`], leaving only `bbox_up 0`.

use crate::collectors::MetricSet;
use crate::error::{ExporterError, Result};
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;
use std::sync::Arc;

const NAMESPACE: &str = "bbox";

/// Static description of one metric family
#[derive(Debug, Clone, Copy)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub labels: &'static [&'static str],
}

const fn desc(
    name: &'static str,
    help: &'static str,
    labels: &'static [&'static str],
) -> MetricDescriptor {
    MetricDescriptor { name, help, labels }
}

/// Every metric family except `bbox_up`, names without the namespace prefix
pub const DESCRIPTORS: &[MetricDescriptor] = &[
    // Device
    desc("device_status", "Current status", &[]),
    desc(
        "device_number_of_boots",
        "Number of boots since last reset to factory default",
        &[],
    ),
    desc("device_temperature", "Current internal temperature in °C", &[]),
    desc("device_memory_total", "Total memory in kB", &[]),
    desc("device_memory_free", "Free memory in kB", &[]),
    desc("device_memory_cached", "Cached memory in kB", &[]),
    desc("device_cpu_total", "CPU total time", &[]),
    desc("device_cpu_user", "CPU user time", &[]),
    desc("device_cpu_nice", "CPU nice time", &[]),
    desc("device_cpu_system", "CPU system time", &[]),
    desc("device_cpu_io", "CPU IO time", &[]),
    desc("device_cpu_idle", "CPU idle time", &[]),
    desc("device_cpu_irq", "CPU irq time", &[]),
    desc("device_process_created", "Number of created processes", &[]),
    desc("device_process_running", "Number of running processes", &[]),
    desc("device_process_blocked", "Number of blocked processes", &[]),
    desc(
        "device_using",
        "Access technology in use (1=yes, 0=no)",
        &["feature"],
    ),
    // Services
    desc(
        "service_enabled",
        "Router feature enabled (1=enabled, 0=disabled)",
        &["service"],
    ),
    desc("service_status", "Router feature status", &["service"]),
    desc(
        "service_rules",
        "Number of rules configured for the feature",
        &["service"],
    ),
    // WAN
    desc("wan_transmitted_bytes", "TX bytes", &[]),
    desc("wan_transmitted_packets", "TX packets", &[]),
    desc("wan_transmitted_packets_errors", "TX packets in error", &[]),
    desc("wan_transmitted_packets_discards", "TX packets discards", &[]),
    desc("wan_transmitted_line_occupation", "TX line occupation", &[]),
    desc("wan_transmitted_bandwidth", "TX bandwidth available", &[]),
    desc(
        "wan_transmitted_bandwidth_max",
        "TX maximum bandwidth available",
        &[],
    ),
    desc("wan_received_bytes", "RX bytes", &[]),
    desc("wan_received_packets", "RX packets", &[]),
    desc("wan_received_packets_errors", "RX packets in error", &[]),
    desc("wan_received_packets_discards", "RX packets discards", &[]),
    desc("wan_received_line_occupation", "RX line occupation", &[]),
    desc("wan_received_bandwidth", "RX bandwidth available", &[]),
    desc(
        "wan_received_bandwidth_max",
        "RX maximum bandwidth available",
        &[],
    ),
    desc("wan_internet_state", "Internet connectivity state", &[]),
    desc("wan_interface_state", "WAN interface state", &[]),
    desc("wan_link_up", "WAN link state (1=up, 0=down)", &["type"]),
    desc("wan_ftth_state", "LinkState of the GEth FTTH port", &[]),
    desc("wan_diagnostics_min", "Minimum response time", &["mode"]),
    desc("wan_diagnostics_max", "Maximum response time", &["mode"]),
    desc("wan_diagnostics_avg", "Average response time", &["mode"]),
    desc("wan_diagnostics_success", "Number of successes", &["mode"]),
    desc("wan_diagnostics_error", "Number of errors", &["mode"]),
    desc("wan_diagnostics_tries", "Number of tries", &["mode"]),
    // LAN
    desc("lan_transmitted_bytes", "TX bytes", &[]),
    desc("lan_transmitted_packets", "TX packets", &[]),
    desc("lan_transmitted_packets_errors", "TX packets in error", &[]),
    desc("lan_transmitted_packets_discards", "TX packets discards", &[]),
    desc("lan_received_bytes", "RX bytes", &[]),
    desc("lan_received_packets", "RX packets", &[]),
    desc("lan_received_packets_errors", "RX packets in error", &[]),
    desc("lan_received_packets_discards", "RX packets discards", &[]),
    desc(
        "lan_connected_devices",
        "Number of active hosts by link",
        &["link"],
    ),
    desc(
        "lan_switch_port_up",
        "Switch port state (1=up, 0=down)",
        &["port"],
    ),
    // Wireless
    desc("wireless_transmitted_bytes", "TX bytes", &["frequency"]),
    desc("wireless_transmitted_packets", "TX packets", &["frequency"]),
    desc(
        "wireless_transmitted_packets_errors",
        "TX packets in error",
        &["frequency"],
    ),
    desc(
        "wireless_transmitted_packets_discards",
        "TX packets discards",
        &["frequency"],
    ),
    desc("wireless_received_bytes", "RX bytes", &["frequency"]),
    desc("wireless_received_packets", "RX packets", &["frequency"]),
    desc(
        "wireless_received_packets_errors",
        "RX packets in error",
        &["frequency"],
    ),
    desc(
        "wireless_received_packets_discards",
        "RX packets discards",
        &["frequency"],
    ),
    // DNS
    desc("dns_number_of_queries", "Number of queries", &[]),
    desc("dns_min", "Minimum of average DNS response time", &[]),
    desc("dns_max", "Maximum of average DNS response time", &[]),
    desc("dns_average", "Average of average DNS response time", &[]),
    // IPTV
    desc(
        "iptv_channel_received",
        "IPTV channel received (1=yes, 0=no)",
        &["name", "address"],
    ),
    desc("iptv_channels", "Number of IPTV channels", &[]),
];

struct Family {
    labels: &'static [&'static str],
    gauges: GaugeVec,
}

/// Metric registry for one exporter instance
#[derive(Clone)]
pub struct BboxMetrics {
    registry: Arc<Registry>,
    families: Arc<HashMap<String, Family>>,
    pub up: Arc<Gauge>,
}

impl BboxMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();
        let mut families = HashMap::with_capacity(DESCRIPTORS.len());

        for descriptor in DESCRIPTORS {
            let gauges = GaugeVec::new(
                Opts::new(descriptor.name, descriptor.help).namespace(NAMESPACE),
                descriptor.labels,
            )?;
            registry.register(Box::new(gauges.clone()))?;
            families.insert(
                format!("{}_{}", NAMESPACE, descriptor.name),
                Family {
                    labels: descriptor.labels,
                    gauges,
                },
            );
        }

        let up = Gauge::with_opts(
            Opts::new("up", "Was the last query of Bbox successful").namespace(NAMESPACE),
        )?;
        registry.register(Box::new(up.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            families: Arc::new(families),
            up: Arc::new(up),
        })
    }

    /// Replace every published series with `samples` and set `bbox_up` to 1.
    ///
    /// Samples are checked against the descriptor table before anything is
    /// touched, so a rejected set leaves the previous state in place.
    ///
    /// # Errors
    ///
    /// Returns [`ExporterError::Metrics`] for an unknown metric name or a
    /// label set that does not match the descriptor.
    pub fn publish(&self, samples: &MetricSet) -> Result<()> {
        let mut resolved = Vec::with_capacity(samples.len());
        for (key, value) in samples.iter() {
            let family = self
                .families
                .get(&key.name)
                .ok_or_else(|| ExporterError::Metrics(format!("unknown metric {}", key.name)))?;

            if key.labels.len() != family.labels.len() {
                return Err(ExporterError::Metrics(format!(
                    "{} expects labels {:?}, got {:?}",
                    key.name, family.labels, key.labels
                )));
            }
            let values = family
                .labels
                .iter()
                .map(|label| {
                    key.labels
                        .iter()
                        .find(|(name, _)| name == label)
                        .map(|(_, v)| v.as_str())
                        .ok_or_else(|| {
                            ExporterError::Metrics(format!(
                                "{} is missing label {}",
                                key.name, label
                            ))
                        })
                })
                .collect::<Result<Vec<&str>>>()?;
            resolved.push((&family.gauges, values, value));
        }

        self.reset();
        for (gauges, values, value) in resolved {
            gauges
                .get_metric_with_label_values(&values)
                .map_err(|e| ExporterError::Metrics(e.to_string()))?
                .set(value);
        }
        self.up.set(1.0);
        Ok(())
    }

    /// Drop every series and set `bbox_up` to 0
    pub fn mark_down(&self) {
        self.reset();
        self.up.set(0.0);
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn reset(&self) {
        for family in self.families.values() {
            family.gauges.reset();
        }
    }
}

impl Default for BboxMetrics {
    fn default() -> Self {
        Self::new().expect("Failed to create Bbox metrics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_descriptor_names_are_unique() {
        let names: HashSet<_> = DESCRIPTORS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), DESCRIPTORS.len());
        assert!(!names.contains("up"));
    }
}
