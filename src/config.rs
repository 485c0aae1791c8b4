use crate::bbox::{Endpoint, WirelessBand};
use crate::error::{ExporterError, Result as ExporterResult};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Routes served next to the metrics path
pub const RESERVED_PATHS: [&str; 3] = ["/", "/health", "/ready"];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub bbox: BboxConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BboxConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_password")]
    pub password: SecretString,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
    #[serde(default = "default_wireless_bands")]
    pub wireless_bands: Vec<WirelessBand>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for BboxConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            password: default_password(),
            verify_ssl: default_verify_ssl(),
            wireless_bands: default_wireless_bands(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
            metrics_path: default_metrics_path(),
        }
    }
}

fn default_endpoint() -> String {
    "https://mabbox.bytel.fr".to_string()
}

fn default_password() -> SecretString {
    SecretString::new(String::new().into())
}

fn default_verify_ssl() -> bool {
    true
}

fn default_wireless_bands() -> Vec<WirelessBand> {
    vec![WirelessBand::Ghz24, WirelessBand::Ghz5]
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9311
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("BBOX_EXPORTER").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Startup checks. Returns the parsed endpoint so callers don't parse twice.
    pub fn validate(&self) -> ExporterResult<Endpoint> {
        let endpoint = Endpoint::parse(&self.bbox.endpoint)?;

        if self.bbox.password.expose_secret().is_empty() {
            return Err(ExporterError::Config(
                "bbox.password must not be empty".to_string(),
            ));
        }

        if self.bbox.wireless_bands.is_empty() {
            return Err(ExporterError::Config(
                "bbox.wireless_bands must list at least one band".to_string(),
            ));
        }

        let path = &self.server.metrics_path;
        if !path.starts_with('/') {
            return Err(ExporterError::Config(format!(
                "server.metrics_path {:?} must start with '/'",
                path
            )));
        }
        if RESERVED_PATHS.contains(&path.as_str()) {
            return Err(ExporterError::Config(format!(
                "server.metrics_path {:?} collides with a built-in route",
                path
            )));
        }

        Ok(endpoint)
    }
}
