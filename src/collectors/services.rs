//! Services Metrics Projector
//!
//! # Metrics Produced
//! - `bbox_service_enabled` - Whether the feature is switched on (0/1)
//!   - Labels: service
//! - `bbox_service_status` - Runtime status reported for the feature
//!   - Labels: service
//! - `bbox_service_rules` - Number of configured rules, where the feature has any
//!   - Labels: service
//!
//! Not every service reports every field. Absent fields produce no sample.

use super::{first, MetricSet};
use crate::bbox::resources::ServicesMetrics;
use crate::bbox::types::{ServiceState, Services};
use crate::error::Result;
use tracing::info;

/// Every service the `/services` payload describes, with its label value
fn service_states(services: &Services) -> [(&'static str, &ServiceState); 16] {
    [
        ("firewall", &services.firewall),
        ("dyndns", &services.dyndns),
        ("dhcp", &services.dhcp),
        ("nat", &services.nat),
        ("gamermode", &services.gamermode),
        ("upnp", &services.upnp.igd),
        ("remote_proxywol", &services.remote.proxywol),
        ("remote_admin", &services.remote.admin),
        ("parentalcontrol", &services.parentalcontrol),
        ("wifischeduler", &services.wifischeduler),
        ("voipscheduler", &services.voipscheduler),
        ("notification", &services.notification),
        ("hotspot", &services.hotspot),
        ("usb_samba", &services.usb.samba),
        ("usb_printer", &services.usb.printer),
        ("usb_dlna", &services.usb.dlna),
    ]
}

pub fn project_services_metrics(metrics: &ServicesMetrics, set: &mut MetricSet) -> Result<()> {
    info!("Store services metrics");

    let services = &first(&metrics.informations, "/services")?.services;
    for (service, state) in service_states(services) {
        let labels = [("service", service)];
        set.set_field(
            "bbox_service_enabled",
            &labels,
            &state.enable,
            &format!("services.{}.enable", service),
        );
        set.set_field(
            "bbox_service_status",
            &labels,
            &state.status,
            &format!("services.{}.status", service),
        );
        set.set_field(
            "bbox_service_rules",
            &labels,
            &state.nbrules,
            &format!("services.{}.nbrules", service),
        );
    }

    Ok(())
}
