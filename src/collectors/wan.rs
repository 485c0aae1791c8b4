//! WAN Metrics Projector
//!
//! Projects the four WAN resources: IP information, IP traffic statistics,
//! FTTH port state and connectivity diagnostics.
//!
//! # Metrics Produced
//! - `bbox_wan_{transmitted,received}_{bytes,packets,packets_errors,packets_discards}`
//! - `bbox_wan_{transmitted,received}_{line_occupation,bandwidth,bandwidth_max}`
//! - `bbox_wan_internet_state` - Internet connectivity state code
//! - `bbox_wan_interface_state` - WAN interface state code
//! - `bbox_wan_link_up` - 1 when the WAN link reports "Up"
//!   - Labels: type
//! - `bbox_wan_ftth_state` - 1 when the FTTH port reports "Up"
//! - `bbox_wan_diagnostics_{min,max,avg,success,error,tries}` - Probe results
//!   - Labels: mode (dns, ping, http)

use super::{first, link_state_value, project_traffic, MetricSet};
use crate::bbox::resources::WanMetrics;
use crate::bbox::types::DiagnosticResult;
use crate::error::Result;
use tracing::{debug, info};

/// First probe entry that has actually been tried.
///
/// The router lists one entry per configured target and leaves entries it has
/// not probed yet at zero tries. Those would show up as zero latency, so they
/// are skipped. Returns `None` when no entry qualifies.
pub fn select_diagnostic(results: &[DiagnosticResult]) -> Option<&DiagnosticResult> {
    results.iter().find(|result| result.tries.is_positive())
}

fn project_diagnostic(set: &mut MetricSet, mode: &'static str, results: &[DiagnosticResult]) {
    let Some(result) = select_diagnostic(results) else {
        debug!("No {} diagnostic with tries > 0, skipping", mode);
        return;
    };

    let labels = [("mode", mode)];
    for (suffix, field, key) in [
        ("min", &result.min, "min"),
        ("max", &result.max, "max"),
        ("avg", &result.average, "average"),
        ("success", &result.success, "success"),
        ("error", &result.error, "error"),
        ("tries", &result.tries, "tries"),
    ] {
        set.set_field(
            format!("bbox_wan_diagnostics_{}", suffix),
            &labels,
            field,
            &format!("diags.{}.{}", mode, key),
        );
    }
}

pub fn project_wan_metrics(metrics: &WanMetrics, set: &mut MetricSet) -> Result<()> {
    info!("Store WAN metrics");

    let info = &first(&metrics.ip_informations, "/wan/ip")?.wan;
    set.set_field(
        "bbox_wan_internet_state",
        &[],
        &info.internet.state,
        "wan.internet.state",
    );
    set.set_field(
        "bbox_wan_interface_state",
        &[],
        &info.interface.state,
        "wan.interface.state",
    );
    let link_type = if info.link.link_type.is_empty() {
        "unknown"
    } else {
        info.link.link_type.as_str()
    };
    set.set(
        "bbox_wan_link_up",
        &[("type", link_type)],
        link_state_value(&info.link.state),
    );

    let stats = &first(&metrics.ip_statistics, "/wan/ip/stats")?.wan.ip.stats;
    project_traffic(set, "bbox_wan", &[], stats, "wan.ip.stats", true);

    let ftth = &first(&metrics.ftth_statistics, "/wan/ftth/stats")?.wan.ftth;
    set.set("bbox_wan_ftth_state", &[], link_state_value(&ftth.state));

    let diags = &first(&metrics.diagnostics, "/wan/diags")?.diags;
    project_diagnostic(set, "dns", &diags.dns);
    project_diagnostic(set, "ping", &diags.ping);
    project_diagnostic(set, "http", &diags.http);

    Ok(())
}
