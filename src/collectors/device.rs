//! Device Metrics Projector
//!
//! Projects `/device`, `/device/cpu` and `/device/mem` into device health,
//! memory and CPU gauges.
//!
//! # Metrics Produced
//! - `bbox_device_status` - Device status reported by the router
//! - `bbox_device_number_of_boots` - Number of boots since factory reset
//! - `bbox_device_temperature` - Current temperature in degrees Celsius
//! - `bbox_device_memory_total` / `_free` / `_cached` - Memory in kB
//! - `bbox_device_cpu_{total,user,nice,system,io,idle,irq}` - CPU time
//! - `bbox_device_process_{created,running,blocked}` - Process counters
//! - `bbox_device_using` - Access technology in use (0/1)
//!   - Labels: feature

use super::{first, MetricSet};
use crate::bbox::resources::DeviceMetrics;
use crate::error::Result;
use tracing::info;

/// Projects device information, CPU and memory figures
///
/// # Errors
///
/// Returns [`crate::error::ExporterError::EmptyResponse`] if any of the three
/// device payloads came back as an empty array.
pub fn project_device_metrics(metrics: &DeviceMetrics, set: &mut MetricSet) -> Result<()> {
    info!("Store device metrics");

    let device = &first(&metrics.informations, "/device")?.device;
    set.set_field("bbox_device_status", &[], &device.status, "device.status");
    set.set_field(
        "bbox_device_number_of_boots",
        &[],
        &device.number_of_boots,
        "device.numberofboots",
    );
    set.set_field(
        "bbox_device_temperature",
        &[],
        &device.temperature.current,
        "device.temperature.current",
    );

    let using = &device.using;
    for (feature, field) in [
        ("ipv4", &using.ipv4),
        ("ipv6", &using.ipv6),
        ("ftth", &using.ftth),
        ("adsl", &using.adsl),
        ("vdsl", &using.vdsl),
    ] {
        set.set_field(
            "bbox_device_using",
            &[("feature", feature)],
            field,
            &format!("device.using.{}", feature),
        );
    }

    let mem = &first(&metrics.memory, "/device/mem")?.device.mem;
    set.set_field("bbox_device_memory_total", &[], &mem.total, "device.mem.total");
    set.set_field("bbox_device_memory_free", &[], &mem.free, "device.mem.free");
    set.set_field("bbox_device_memory_cached", &[], &mem.cached, "device.mem.cached");

    let cpu = &first(&metrics.cpu, "/device/cpu")?.device.cpu;
    let time = &cpu.time;
    for (key, field) in [
        ("total", &time.total),
        ("user", &time.user),
        ("nice", &time.nice),
        ("system", &time.system),
        ("io", &time.io),
        ("idle", &time.idle),
        ("irq", &time.irq),
    ] {
        set.set_field(
            format!("bbox_device_cpu_{}", key),
            &[],
            field,
            &format!("device.cpu.time.{}", key),
        );
    }

    let process = &cpu.process;
    for (key, field) in [
        ("created", &process.created),
        ("running", &process.running),
        ("blocked", &process.blocked),
    ] {
        set.set_field(
            format!("bbox_device_process_{}", key),
            &[],
            field,
            &format!("device.cpu.process.{}", key),
        );
    }

    Ok(())
}
