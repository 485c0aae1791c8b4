//! Metric Projection
//!
//! Turns a [`Snapshot`] into the flat set of samples the exporter publishes.
//! Each resource group has its own module; all of them write into a shared
//! [`MetricSet`].
//!
//! # Architecture
//!
//! Projectors follow a consistent pattern:
//! - Take the group's fetched payloads and a `&mut MetricSet`
//! - Index array-wrapped payloads through [`first`], which turns an empty
//!   response into [`ExporterError::EmptyResponse`] instead of a panic
//! - Record numeric fields through [`MetricSet::set_field`], which omits the
//!   sample (and logs the field path) when the value could not be decoded
//!
//! # Error Handling
//!
//! Structural problems (an empty response) fail the whole projection, so no
//! partial snapshot is ever published. Field-level numeric problems only drop
//! the affected sample.
//!
//! Projection is a pure function of the snapshot: the same input always gives
//! the same [`MetricSet`].

use crate::bbox::types::TrafficStats;
use crate::bbox::{NumericField, ResourceGroup, Snapshot};
use crate::error::{ExporterError, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub mod device;
pub mod dns;
pub mod iptv;
pub mod lan;
pub mod services;
pub mod wan;
pub mod wireless;

pub use device::project_device_metrics;
pub use dns::project_dns_metrics;
pub use iptv::project_iptv_metrics;
pub use lan::project_lan_metrics;
pub use services::project_services_metrics;
pub use wan::{project_wan_metrics, select_diagnostic};
pub use wireless::project_wireless_metrics;

/// Identity of one sample: metric name plus ordered label pairs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleKey {
    pub name: String,
    pub labels: Vec<(&'static str, String)>,
}

/// The samples produced by one projection, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    samples: BTreeMap<SampleKey, f64>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample, replacing any previous value for the same key
    pub fn set(&mut self, name: impl Into<String>, labels: &[(&'static str, &str)], value: f64) {
        let key = SampleKey {
            name: name.into(),
            labels: labels.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        };
        self.samples.insert(key, value);
    }

    /// Records a decoded field, or omits the sample if the field is invalid or missing
    pub fn set_field(
        &mut self,
        name: impl Into<String>,
        labels: &[(&'static str, &str)],
        field: &NumericField,
        path: &str,
    ) {
        let name: String = name.into();
        match field {
            NumericField::Value(v) => self.set(name, labels, *v),
            NumericField::Invalid(reason) => {
                warn!("Skipping {}: cannot decode {}: {}", name, path, reason);
            }
            NumericField::Missing => {
                debug!("Skipping {}: {} not present", name, path);
            }
        }
    }

    /// Adds `value` to the sample, starting from zero
    pub fn add(&mut self, name: impl Into<String>, labels: &[(&'static str, &str)], value: f64) {
        let key = SampleKey {
            name: name.into(),
            labels: labels.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        };
        *self.samples.entry(key).or_insert(0.0) += value;
    }

    pub fn get(&self, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
        self.samples
            .iter()
            .find(|(key, _)| {
                key.name == name
                    && key.labels.len() == labels.len()
                    && key
                        .labels
                        .iter()
                        .zip(labels)
                        .all(|((k, v), (ek, ev))| k == ek && v == ev)
            })
            .map(|(_, value)| *value)
    }

    /// True if any sample carries this metric name
    pub fn contains_metric(&self, name: &str) -> bool {
        self.samples.keys().any(|key| key.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SampleKey, f64)> {
        self.samples.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// First element of an array-wrapped response
pub fn first<'a, T>(items: &'a [T], resource: &'static str) -> Result<&'a T> {
    items
        .first()
        .ok_or(ExporterError::EmptyResponse { resource })
}

/// rx/tx counters as `<prefix>_{received,transmitted}_*`.
/// `line_stats` adds the WAN-only occupation and bandwidth figures.
pub(crate) fn project_traffic(
    set: &mut MetricSet,
    prefix: &str,
    labels: &[(&'static str, &str)],
    stats: &TrafficStats,
    path: &str,
    line_stats: bool,
) {
    for (direction, short, counters) in [
        ("transmitted", "tx", &stats.tx),
        ("received", "rx", &stats.rx),
    ] {
        let name = |suffix: &str| format!("{}_{}_{}", prefix, direction, suffix);
        let field = |key: &str| format!("{}.{}.{}", path, short, key);

        set.set_field(name("bytes"), labels, &counters.bytes, &field("bytes"));
        set.set_field(name("packets"), labels, &counters.packets, &field("packets"));
        set.set_field(
            name("packets_errors"),
            labels,
            &counters.packetserrors,
            &field("packetserrors"),
        );
        set.set_field(
            name("packets_discards"),
            labels,
            &counters.packetsdiscards,
            &field("packetsdiscards"),
        );

        if line_stats {
            set.set_field(
                name("line_occupation"),
                labels,
                &counters.occupation,
                &field("occupation"),
            );
            set.set_field(
                name("bandwidth"),
                labels,
                &counters.bandwidth,
                &field("bandwidth"),
            );
            set.set_field(
                name("bandwidth_max"),
                labels,
                &counters.max_bandwidth,
                &field("maxBandwidth"),
            );
        }
    }
}

/// 1.0 when `state` reads "up" in any case, else 0.0
pub fn link_state_value(state: &str) -> f64 {
    if state.eq_ignore_ascii_case("UP") {
        1.0
    } else {
        0.0
    }
}

/// Projects every group of a complete snapshot, in fetch order
pub fn project(snapshot: &Snapshot) -> Result<MetricSet> {
    let mut set = MetricSet::new();

    project_device_metrics(&snapshot.device, &mut set)
        .map_err(|e| e.in_group(ResourceGroup::Device))?;
    project_services_metrics(&snapshot.services, &mut set)
        .map_err(|e| e.in_group(ResourceGroup::Services))?;
    project_wan_metrics(&snapshot.wan, &mut set).map_err(|e| e.in_group(ResourceGroup::Wan))?;
    project_lan_metrics(&snapshot.lan, &mut set).map_err(|e| e.in_group(ResourceGroup::Lan))?;
    project_wireless_metrics(&snapshot.wireless, &mut set)
        .map_err(|e| e.in_group(ResourceGroup::Wireless))?;
    project_dns_metrics(&snapshot.dns, &mut set).map_err(|e| e.in_group(ResourceGroup::Dns))?;
    project_iptv_metrics(&snapshot.iptv, &mut set)
        .map_err(|e| e.in_group(ResourceGroup::Iptv))?;

    Ok(set)
}
