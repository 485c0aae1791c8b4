//! Snapshot Aggregation
//!
//! One collection cycle against the device: log in, then run every resource
//! fetcher in a fixed order. The first failure aborts the cycle; a
//! [`Snapshot`] only exists when every group was fetched.

use super::client::BboxClient;
use super::resources::*;
use super::{ResourceGroup, WirelessBand};
use crate::error::Result;
use secrecy::SecretString;
use tracing::{debug, info};

/// Every resource group of one collection cycle
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub device: DeviceMetrics,
    pub services: ServicesMetrics,
    pub wan: WanMetrics,
    pub lan: LanMetrics,
    pub wireless: WirelessMetrics,
    pub dns: DnsMetrics,
    pub iptv: IptvMetrics,
}

impl BboxClient {
    /// Authenticate and fetch all groups in order: device, services, WAN, LAN,
    /// wireless, DNS, IPTV.
    ///
    /// No fetch is attempted when authentication fails. Errors are wrapped with
    /// the group that failed.
    pub async fn collect_snapshot(
        &self,
        password: &SecretString,
        bands: &[WirelessBand],
    ) -> Result<Snapshot> {
        info!("Get metrics from Bbox");
        self.authenticate(password).await?;

        let device = self
            .fetch_device()
            .await
            .map_err(|e| e.in_group(ResourceGroup::Device))?;
        debug!("Device metrics: {:?}", device);

        let services = self
            .fetch_services()
            .await
            .map_err(|e| e.in_group(ResourceGroup::Services))?;
        debug!("Services metrics: {:?}", services);

        let wan = self
            .fetch_wan()
            .await
            .map_err(|e| e.in_group(ResourceGroup::Wan))?;
        debug!("WAN metrics: {:?}", wan);

        let lan = self
            .fetch_lan()
            .await
            .map_err(|e| e.in_group(ResourceGroup::Lan))?;
        debug!("LAN metrics: {:?}", lan);

        let wireless = self
            .fetch_wireless(bands)
            .await
            .map_err(|e| e.in_group(ResourceGroup::Wireless))?;
        debug!("Wireless metrics: {:?}", wireless);

        let dns = self
            .fetch_dns()
            .await
            .map_err(|e| e.in_group(ResourceGroup::Dns))?;
        debug!("DNS metrics: {:?}", dns);

        let iptv = self
            .fetch_iptv()
            .await
            .map_err(|e| e.in_group(ResourceGroup::Iptv))?;
        debug!("IPTV metrics: {:?}", iptv);

        Ok(Snapshot {
            device,
            services,
            wan,
            lan,
            wireless,
            dns,
            iptv,
        })
    }
}
