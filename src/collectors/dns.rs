//! DNS Metrics Projector
//!
//! # Metrics Produced
//! - `bbox_dns_number_of_queries` - DNS queries served
//! - `bbox_dns_min` / `bbox_dns_max` / `bbox_dns_average` - Response time in ms

use super::{first, MetricSet};
use crate::bbox::resources::DnsMetrics;
use crate::error::Result;
use tracing::info;

pub fn project_dns_metrics(metrics: &DnsMetrics, set: &mut MetricSet) -> Result<()> {
    info!("Store DNS metrics");

    let dns = &first(&metrics.statistics, "/dns/stats")?.dns;
    set.set_field(
        "bbox_dns_number_of_queries",
        &[],
        &dns.nbqueries,
        "dns.nbqueries",
    );
    set.set_field("bbox_dns_min", &[], &dns.min, "dns.min");
    set.set_field("bbox_dns_max", &[], &dns.max, "dns.max");
    set.set_field("bbox_dns_average", &[], &dns.avg, "dns.avg");

    Ok(())
}
