//! Resource Fetchers
//!
//! One fetcher per resource group. Each issues its sub-resource GETs in a fixed
//! order and stops at the first failure, wrapping it with the API path that
//! failed. Array-wrapped responses are kept as decoded; emptiness is checked
//! at projection time.

use super::client::BboxClient;
use super::types::*;
use super::WirelessBand;
use crate::error::Result;
use serde::de::DeserializeOwned;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct DeviceMetrics {
    pub informations: Vec<DeviceInformations>,
    pub cpu: Vec<DeviceCpu>,
    pub memory: Vec<DeviceMemory>,
}

#[derive(Debug, Clone, Default)]
pub struct ServicesMetrics {
    pub informations: Vec<ServicesInformations>,
}

#[derive(Debug, Clone, Default)]
pub struct WanMetrics {
    pub ip_informations: Vec<WanIpInformations>,
    pub ip_statistics: Vec<WanIpStatistics>,
    pub ftth_statistics: Vec<FtthStatistics>,
    pub diagnostics: Vec<WanDiagnostics>,
}

#[derive(Debug, Clone, Default)]
pub struct LanMetrics {
    pub ip_informations: Vec<LanIpInformations>,
    pub statistics: Vec<LanStatistics>,
    pub devices: Vec<LanDevices>,
}

/// Statistics of one radio band
#[derive(Debug, Clone)]
pub struct BandStatistics {
    pub band: WirelessBand,
    pub statistics: Vec<WirelessStatistics>,
}

#[derive(Debug, Clone, Default)]
pub struct WirelessMetrics {
    pub bands: Vec<BandStatistics>,
}

#[derive(Debug, Clone, Default)]
pub struct DnsMetrics {
    pub statistics: Vec<DnsStatistics>,
}

#[derive(Debug, Clone, Default)]
pub struct IptvMetrics {
    pub informations: Vec<IptvInformations>,
}

impl BboxClient {
    /// GET an array-wrapped resource, tagging any failure with its path
    async fn get_resource<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.authenticated_get(path)
            .await
            .map_err(|e| e.in_resource(path))
    }

    /// `/device`, `/device/cpu`, `/device/mem`
    pub async fn fetch_device(&self) -> Result<DeviceMetrics> {
        info!("Retrieve device informations");
        let informations = self.get_resource("/device").await?;
        let cpu = self.get_resource("/device/cpu").await?;
        let memory = self.get_resource("/device/mem").await?;
        Ok(DeviceMetrics {
            informations,
            cpu,
            memory,
        })
    }

    /// `/services`
    pub async fn fetch_services(&self) -> Result<ServicesMetrics> {
        info!("Retrieve services informations");
        let informations = self.get_resource("/services").await?;
        Ok(ServicesMetrics { informations })
    }

    /// `/wan/ip`, `/wan/ip/stats`, `/wan/ftth/stats`, `/wan/diags`
    pub async fn fetch_wan(&self) -> Result<WanMetrics> {
        info!("Retrieve WAN informations");
        let ip_informations = self.get_resource("/wan/ip").await?;
        let ip_statistics = self.get_resource("/wan/ip/stats").await?;
        let ftth_statistics = self.get_resource("/wan/ftth/stats").await?;
        let diagnostics = self.get_resource("/wan/diags").await?;
        Ok(WanMetrics {
            ip_informations,
            ip_statistics,
            ftth_statistics,
            diagnostics,
        })
    }

    /// `/lan/ip`, `/lan/stats`, `/hosts`
    pub async fn fetch_lan(&self) -> Result<LanMetrics> {
        info!("Retrieve LAN informations");
        let ip_informations = self.get_resource("/lan/ip").await?;
        let statistics = self.get_resource("/lan/stats").await?;
        let devices = self.get_resource("/hosts").await?;
        Ok(LanMetrics {
            ip_informations,
            statistics,
            devices,
        })
    }

    /// `/wireless/<band>/stats` once per band, in the given order
    pub async fn fetch_wireless(&self, bands: &[WirelessBand]) -> Result<WirelessMetrics> {
        let mut metrics = WirelessMetrics::default();
        for band in bands {
            info!("Retrieve wireless {} statistics", band.label());
            let statistics = self.get_resource(band.stats_path()).await?;
            metrics.bands.push(BandStatistics {
                band: *band,
                statistics,
            });
        }
        Ok(metrics)
    }

    /// `/dns/stats`
    pub async fn fetch_dns(&self) -> Result<DnsMetrics> {
        info!("Retrieve DNS statistics");
        let statistics = self.get_resource("/dns/stats").await?;
        Ok(DnsMetrics { statistics })
    }

    /// `/iptv`
    pub async fn fetch_iptv(&self) -> Result<IptvMetrics> {
        info!("Retrieve IPTV informations");
        let informations = self.get_resource("/iptv").await?;
        Ok(IptvMetrics { informations })
    }
}
