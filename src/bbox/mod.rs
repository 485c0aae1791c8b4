pub mod auth;
pub mod client;
pub mod number;
pub mod resources;
pub mod snapshot;
pub mod types;

pub use client::{BboxClient, Endpoint, Session};
pub use number::{FlexibleNumber, NumericField};
pub use snapshot::Snapshot;

use serde::Deserialize;
use std::fmt;

/// Logical category of device telemetry, in fetch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceGroup {
    Device,
    Services,
    Wan,
    Lan,
    Wireless,
    Dns,
    Iptv,
}

impl ResourceGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Services => "services",
            Self::Wan => "wan",
            Self::Lan => "lan",
            Self::Wireless => "wireless",
            Self::Dns => "dns",
            Self::Iptv => "iptv",
        }
    }
}

impl fmt::Display for ResourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wi-Fi frequency band, identified in API paths by a short code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum WirelessBand {
    #[serde(rename = "24")]
    Ghz24,
    #[serde(rename = "5")]
    Ghz5,
}

impl WirelessBand {
    /// Code used in `/wireless/<code>/stats`
    pub fn code(self) -> &'static str {
        match self {
            Self::Ghz24 => "24",
            Self::Ghz5 => "5",
        }
    }

    /// Value of the `frequency` metric label
    pub fn label(self) -> &'static str {
        match self {
            Self::Ghz24 => "24ghz",
            Self::Ghz5 => "5ghz",
        }
    }

    pub fn stats_path(self) -> &'static str {
        match self {
            Self::Ghz24 => "/wireless/24/stats",
            Self::Ghz5 => "/wireless/5/stats",
        }
    }
}
