//! Bbox API Session Client
//!
//! This module provides the HTTP client for the Bbox router's local management API.
//!
//! # Architecture
//!
//! - **Endpoint**: an `https://` base URL, validated once in [`Endpoint::parse`]
//! - **API prefix**: every resource lives under `/api/v1`
//! - **Authentication**: a session cookie set obtained from `POST /api/v1/login`
//!   (see [`super::auth`]) and attached to every subsequent request
//!
//! Requests are sequential. Every GET carries the full cookie set, asks the
//! device not to serve a cached response, and is bounded by [`REQUEST_TIMEOUT`].
//!
//! # Example
//!
//! ```no_run
//! use bbox_exporter::bbox::{BboxClient, Endpoint};
//! use bbox_exporter::bbox::types::DeviceInformations;
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let endpoint = Endpoint::parse("https://mabbox.bytel.fr")?;
//! let client = BboxClient::new(endpoint, true)?;
//! client.authenticate(&SecretString::new("admin-password".into())).await?;
//! let device: Vec<DeviceInformations> = client.authenticated_get("/device").await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{ExporterError, Result};
use reqwest::header::{ACCEPT, CACHE_CONTROL, COOKIE, PRAGMA};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

/// Path prefix of the versioned Bbox API
pub const API_PREFIX: &str = "/api/v1";

/// Upper bound for every call made against the device
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("bbox-exporter/", env!("CARGO_PKG_VERSION"));

/// Base URL of the Bbox, immutable once the client is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parses and validates an endpoint; only `https` is accepted
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|e| ExporterError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "https" {
            return Err(ExporterError::InvalidEndpoint {
                url: raw.to_string(),
                reason: format!("scheme must be https, got {}", url.scheme()),
            });
        }
        Ok(Self(url))
    }

    /// Builds an endpoint without the scheme check.
    ///
    /// Only meant for talking to a plain-HTTP mock server in tests.
    #[doc(hidden)]
    pub fn new_unchecked(url: Url) -> Self {
        Self(url)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// `<base>/api/v1<path>`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.0.as_str().trim_end_matches('/'), API_PREFIX, path)
    }
}

/// A single session cookie returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

/// Cookies proving an authenticated session; empty until the first login
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    cookies: Vec<SessionCookie>,
}

impl Session {
    pub fn new(cookies: Vec<SessionCookie>) -> Self {
        Self { cookies }
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Value for a `Cookie` request header, or `None` without a session
    pub fn header_value(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|c| format!("{}={}", c.name, c.value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// Client for the Bbox local API
///
/// Owns the endpoint and the session cookie set. The session is written only by
/// [`BboxClient::authenticate`] and replaced as a whole on every successful login.
pub struct BboxClient {
    http: reqwest::Client,
    endpoint: Endpoint,
    session: RwLock<Session>,
}

impl BboxClient {
    /// Builds a client. `verify_ssl = false` accepts self-signed router certificates.
    ///
    /// Redirects are never followed, so a 3xx login answer is reported as a failure.
    pub fn new(endpoint: Endpoint, verify_ssl: bool) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(!verify_ssl)
            .build()?;
        Ok(Self::with_client(http, endpoint))
    }

    /// Builds a client around a pre-configured `reqwest::Client`
    pub fn with_client(http: reqwest::Client, endpoint: Endpoint) -> Self {
        Self {
            http,
            endpoint,
            session: RwLock::new(Session::default()),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Snapshot of the current session cookies
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub(crate) async fn replace_session(&self, session: Session) {
        *self.session.write().await = session;
    }

    /// GET `<base>/api/v1<path>` with the session cookies and decode the body into `T`.
    ///
    /// HTTP status codes are not interpreted here: an error page that does not
    /// match `T` surfaces as a decode error.
    pub async fn authenticated_get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint.api_url(path);
        debug!("Bbox API request: GET {}", url);

        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .timeout(REQUEST_TIMEOUT);
        if let Some(cookies) = self.session.read().await.header_value() {
            request = request.header(COOKIE, cookies);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(
            "Bbox API response: {} ({} bytes, status {})",
            path,
            body.len(),
            status
        );

        serde_json::from_slice(&body).map_err(|source| ExporterError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
