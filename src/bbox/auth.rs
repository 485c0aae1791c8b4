//! Bbox Authentication
//!
//! Logs in with the admin password and stores the returned session cookies on
//! the [`BboxClient`]. Sessions are not tracked for freshness: the exporter
//! logs in again at the start of every collection cycle.

use super::client::{BboxClient, Session, SessionCookie, REQUEST_TIMEOUT};
use crate::error::{ExporterError, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, info};

/// Structured error body returned by the Bbox API
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub exception: ApiException,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiException {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = &self.exception;
        write!(f, "domain={} code={}", e.domain, e.code)?;
        for detail in &e.errors {
            write!(f, ", {}: {}", detail.name, detail.reason)?;
        }
        Ok(())
    }
}

impl BboxClient {
    /// POST the password to `/login` and replace the session with the returned cookies.
    ///
    /// Fails on a transport error, on a status of 300 or above (with the
    /// decoded [`ApiError`] in the message when the body has one), or when the
    /// response carries no cookie. The previous session is left untouched on failure.
    pub async fn authenticate(&self, password: &SecretString) -> Result<()> {
        let url = self.endpoint().api_url("/login");
        debug!("Bbox API request: POST {}", url);

        let response = self
            .http()
            .post(&url)
            .form(&[("password", password.expose_secret())])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        let cookies: Vec<SessionCookie> = response
            .cookies()
            .map(|c| SessionCookie {
                name: c.name().to_string(),
                value: c.value().to_string(),
            })
            .collect();

        if status.as_u16() >= 300 {
            let body = response.bytes().await?;
            let message = match serde_json::from_slice::<ApiError>(&body) {
                Ok(api_error) => format!("status {}: {}", status, api_error),
                Err(_) => format!("status {}", status),
            };
            return Err(ExporterError::Auth(message));
        }

        if cookies.is_empty() {
            return Err(ExporterError::Auth(
                "no session cookie in login response".to_string(),
            ));
        }

        info!("Authenticated against Bbox ({} cookies)", cookies.len());
        self.replace_session(Session::new(cookies)).await;
        Ok(())
    }
}
