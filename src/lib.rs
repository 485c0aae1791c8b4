//! Bbox Prometheus Exporter
//!
//! A Prometheus metrics exporter for Bouygues Telecom Bbox routers.
//!
//! # Overview
//!
//! On every scrape the exporter logs in to the router's local API, reads the
//! device, services, WAN, LAN, wireless, DNS and IPTV resources, and republishes
//! them as gauges. A cycle is all-or-nothing: either every resource was read
//! and the full set is published with `bbox_up 1`, or only `bbox_up 0` is.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    HTTPS + cookie    ┌──────────────┐
//! │    Bbox     │ ◄─────────────────►  │   Exporter   │
//! │  /api/v1    │      JSON            │              │
//! └─────────────┘                      │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                      │  │ Client │  │ ◄────────────► │ Prometheus │
//!                                      │  └────────┘  │   /metrics     └────────────┘
//!                                      │  ┌────────┐  │
//!                                      │  │Metrics │  │
//!                                      │  └────────┘  │
//!                                      └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`bbox`] - API client, authentication, payload types and fetchers
//! - [`collectors`] - Projection of a snapshot into metric samples
//! - [`metrics`] - Prometheus metric registry
//! - [`exporter`] - One collection cycle
//! - [`server`] - HTTP server
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use bbox_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```

pub mod bbox;
pub mod collectors;
pub mod config;
pub mod error;
pub mod exporter;
pub mod metrics;
pub mod server;
