//! Bbox API Type Definitions
//!
//! Rust struct definitions for the Bbox router API responses.
//!
//! # Design Notes
//!
//! - **Array wrapping**: the API wraps every resource, even single-object ones, in
//!   a JSON array. Resource types here describe one element; fetchers decode
//!   `Vec<T>` and never assume the array is non-empty.
//! - **Numbers**: every measurement is a [`NumericField`] because firmware
//!   versions disagree on number vs. string encodings.
//! - **Serde Defaults**: `#[serde(default)]` everywhere, a missing field becomes
//!   [`NumericField::Missing`] and is skipped at projection time.
//! - **Opaque lists**: IPv6 address and prefix lists are never turned into
//!   metrics and are kept as raw JSON values.
//!
//! # API Endpoints Covered
//!
//! - `/device` → [`DeviceInformations`]
//! - `/device/cpu` → [`DeviceCpu`]
//! - `/device/mem` → [`DeviceMemory`]
//! - `/services` → [`ServicesInformations`]
//! - `/wan/ip` → [`WanIpInformations`]
//! - `/wan/ip/stats` → [`WanIpStatistics`]
//! - `/wan/ftth/stats` → [`FtthStatistics`]
//! - `/wan/diags` → [`WanDiagnostics`]
//! - `/lan/ip` → [`LanIpInformations`]
//! - `/lan/stats` → [`LanStatistics`]
//! - `/hosts` → [`LanDevices`]
//! - `/wireless/<band>/stats` → [`WirelessStatistics`]
//! - `/dns/stats` → [`DnsStatistics`]
//! - `/iptv` → [`IptvInformations`]

#![allow(dead_code)] // Allow unused fields in API structs for completeness
use super::number::NumericField;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Device
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceInformations {
    #[serde(default)]
    pub device: DeviceInfo,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceInfo {
    #[serde(default)]
    pub now: String,
    #[serde(default)]
    pub status: NumericField,
    #[serde(default, alias = "numberofboots")]
    pub number_of_boots: NumericField,
    #[serde(default)]
    pub modelname: String,
    #[serde(default)]
    pub temperature: DeviceTemperature,
    #[serde(default)]
    pub using: DeviceUsing,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceTemperature {
    #[serde(default)]
    pub current: NumericField,
    #[serde(default)]
    pub status: String,
}

/// Access technologies in use (0/1 flags)
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceUsing {
    #[serde(default)]
    pub ipv4: NumericField,
    #[serde(default)]
    pub ipv6: NumericField,
    #[serde(default)]
    pub ftth: NumericField,
    #[serde(default)]
    pub adsl: NumericField,
    #[serde(default)]
    pub vdsl: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceMemory {
    #[serde(default)]
    pub device: DeviceMemoryInner,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceMemoryInner {
    #[serde(default)]
    pub mem: MemoryStats,
}

/// Memory figures in kB
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MemoryStats {
    #[serde(default)]
    pub total: NumericField,
    #[serde(default)]
    pub free: NumericField,
    #[serde(default)]
    pub cached: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceCpu {
    #[serde(default)]
    pub device: DeviceCpuInner,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceCpuInner {
    #[serde(default)]
    pub cpu: CpuStats,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CpuStats {
    #[serde(default)]
    pub time: CpuTime,
    #[serde(default)]
    pub process: CpuProcess,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CpuTime {
    #[serde(default)]
    pub total: NumericField,
    #[serde(default)]
    pub user: NumericField,
    #[serde(default)]
    pub nice: NumericField,
    #[serde(default)]
    pub system: NumericField,
    #[serde(default)]
    pub io: NumericField,
    #[serde(default)]
    pub idle: NumericField,
    #[serde(default)]
    pub irq: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CpuProcess {
    #[serde(default)]
    pub created: NumericField,
    #[serde(default)]
    pub running: NumericField,
    #[serde(default)]
    pub blocked: NumericField,
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServicesInformations {
    #[serde(default)]
    pub services: Services,
}

/// State of one router feature. Not every service reports every field;
/// dyndns calls its status `state`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceState {
    #[serde(default, alias = "state")]
    pub status: NumericField,
    #[serde(default)]
    pub enable: NumericField,
    #[serde(default)]
    pub nbrules: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Services {
    #[serde(default)]
    pub now: String,
    #[serde(default)]
    pub firewall: ServiceState,
    #[serde(default)]
    pub dyndns: ServiceState,
    #[serde(default)]
    pub dhcp: ServiceState,
    #[serde(default)]
    pub nat: ServiceState,
    #[serde(default)]
    pub gamermode: ServiceState,
    #[serde(default)]
    pub upnp: Upnp,
    #[serde(default)]
    pub remote: Remote,
    #[serde(default)]
    pub parentalcontrol: ServiceState,
    #[serde(default)]
    pub wifischeduler: ServiceState,
    #[serde(default)]
    pub voipscheduler: ServiceState,
    #[serde(default)]
    pub notification: ServiceState,
    #[serde(default)]
    pub hotspot: ServiceState,
    #[serde(default)]
    pub usb: Usb,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Upnp {
    #[serde(default)]
    pub igd: ServiceState,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Remote {
    #[serde(default)]
    pub proxywol: ServiceState,
    #[serde(default)]
    pub admin: ServiceState,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Usb {
    #[serde(default)]
    pub samba: ServiceState,
    #[serde(default)]
    pub printer: ServiceState,
    #[serde(default)]
    pub dlna: ServiceState,
}

// ---------------------------------------------------------------------------
// Traffic counters shared by WAN, LAN and wireless
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TrafficStats {
    #[serde(default)]
    pub rx: TrafficCounters,
    #[serde(default)]
    pub tx: TrafficCounters,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TrafficCounters {
    #[serde(default)]
    pub packets: NumericField,
    #[serde(default)]
    pub bytes: NumericField,
    #[serde(default)]
    pub packetserrors: NumericField,
    #[serde(default)]
    pub packetsdiscards: NumericField,
    /// WAN only
    #[serde(default)]
    pub occupation: NumericField,
    /// WAN only
    #[serde(default)]
    pub bandwidth: NumericField,
    /// WAN only
    #[serde(default, rename = "maxBandwidth")]
    pub max_bandwidth: NumericField,
}

// ---------------------------------------------------------------------------
// WAN
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanIpInformations {
    #[serde(default)]
    pub wan: WanIpInfo,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanIpInfo {
    #[serde(default)]
    pub internet: WanInternet,
    #[serde(default)]
    pub interface: WanInterface,
    #[serde(default)]
    pub ip: WanIp,
    #[serde(default)]
    pub link: WanLink,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanInternet {
    #[serde(default)]
    pub state: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanInterface {
    #[serde(default)]
    pub id: NumericField,
    #[serde(default)]
    pub default: NumericField,
    #[serde(default)]
    pub state: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanIp {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub dnsservers: String,
    #[serde(default)]
    pub subnet: String,
    #[serde(default)]
    pub ip6state: String,
    #[serde(default)]
    pub ip6address: Vec<serde_json::Value>,
    #[serde(default)]
    pub ip6prefix: Vec<serde_json::Value>,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub mtu: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanLink {
    #[serde(default)]
    pub state: String,
    #[serde(default, rename = "type")]
    pub link_type: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanIpStatistics {
    #[serde(default)]
    pub wan: WanIpStatsWan,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanIpStatsWan {
    #[serde(default)]
    pub ip: WanIpStatsIp,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanIpStatsIp {
    #[serde(default)]
    pub stats: TrafficStats,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FtthStatistics {
    #[serde(default)]
    pub wan: FtthWan,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FtthWan {
    #[serde(default)]
    pub ftth: Ftth,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Ftth {
    #[serde(default)]
    pub mode: String,
    /// Link state of the GEth FTTH port, e.g. `"Up"`
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WanDiagnostics {
    #[serde(default)]
    pub diags: Diagnostics,
}

/// Probe attempts per protocol, one entry per configured target
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Diagnostics {
    #[serde(default)]
    pub dns: Vec<DiagnosticResult>,
    #[serde(default)]
    pub ping: Vec<DiagnosticResult>,
    #[serde(default)]
    pub http: Vec<DiagnosticResult>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DiagnosticResult {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub min: NumericField,
    #[serde(default)]
    pub max: NumericField,
    #[serde(default)]
    pub average: NumericField,
    #[serde(default)]
    pub success: NumericField,
    #[serde(default)]
    pub error: NumericField,
    #[serde(default)]
    pub tries: NumericField,
}

// ---------------------------------------------------------------------------
// LAN
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanIpInformations {
    #[serde(default)]
    pub lan: LanIpInfo,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanIpInfo {
    #[serde(default)]
    pub ip: LanIp,
    #[serde(default)]
    pub switch: LanSwitch,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanIp {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub mtu: NumericField,
    #[serde(default)]
    pub ipaddress: String,
    #[serde(default)]
    pub ip6enable: NumericField,
    #[serde(default)]
    pub ip6state: String,
    #[serde(default)]
    pub ip6address: Vec<serde_json::Value>,
    #[serde(default)]
    pub ip6prefix: Vec<serde_json::Value>,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub domain: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanSwitch {
    #[serde(default)]
    pub ports: Vec<SwitchPort>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SwitchPort {
    #[serde(default)]
    pub id: NumericField,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub link_mode: String,
    #[serde(default)]
    pub blocked: NumericField,
    #[serde(default)]
    pub flickering: NumericField,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanStatistics {
    #[serde(default)]
    pub lan: LanStatsLan,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanStatsLan {
    #[serde(default)]
    pub stats: TrafficStats,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanDevices {
    #[serde(default)]
    pub hosts: LanHosts,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanHosts {
    #[serde(default)]
    pub list: Vec<LanHost>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanHost {
    #[serde(default)]
    pub id: NumericField,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub macaddress: String,
    #[serde(default)]
    pub ipaddress: String,
    #[serde(default, rename = "type")]
    pub host_type: String,
    /// Physical link the host is seen on, e.g. `"Ethernet"` or `"Wifi 5"`
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub devicetype: String,
    #[serde(default)]
    pub ip6address: Vec<serde_json::Value>,
    #[serde(default)]
    pub lease: NumericField,
    /// 1 while the host is connected
    #[serde(default)]
    pub active: NumericField,
}

// ---------------------------------------------------------------------------
// Wireless
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WirelessStatistics {
    #[serde(default)]
    pub wireless: WirelessInner,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WirelessInner {
    #[serde(default)]
    pub ssid: WirelessSsid,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WirelessSsid {
    /// Numeric on some firmware, string on others; unused
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub stats: TrafficStats,
}

// ---------------------------------------------------------------------------
// DNS
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DnsStatistics {
    #[serde(default)]
    pub dns: DnsStats,
}

/// Response times in milliseconds
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DnsStats {
    #[serde(default)]
    pub nbqueries: NumericField,
    #[serde(default)]
    pub min: NumericField,
    #[serde(default)]
    pub max: NumericField,
    #[serde(default)]
    pub avg: NumericField,
}

// ---------------------------------------------------------------------------
// IPTV
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct IptvInformations {
    #[serde(default)]
    pub iptv: Vec<IptvChannel>,
    #[serde(default)]
    pub now: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct IptvChannel {
    /// Multicast address
    #[serde(default)]
    pub address: String,
    /// Receiver address
    #[serde(default)]
    pub ipaddress: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: NumericField,
    /// 1 when the channel is actually received
    #[serde(default)]
    pub receipt: NumericField,
    #[serde(default)]
    pub epgid: NumericField,
}
