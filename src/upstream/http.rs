//! HTTP client for the weather service.

use std::time::Duration;

use reqwest::{header::ACCEPT, Client};

use super::{Result, UpstreamClient, UpstreamError};
use crate::config::Config;
use crate::models::WeatherInfo;

/// Path of the weather lookup endpoint on the upstream service
pub const WEATHER_PATH: &str = "/api/weather";

/// Client for the upstream weather service.
///
/// Issues `GET {base_url}/api/weather?location=<raw>` and maps the response
/// onto [`UpstreamClient`] semantics. The request timeout lives here.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    endpoint: String,
}

impl HttpUpstream {
    /// Creates a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), WEATHER_PATH),
        })
    }

    /// Creates a client from the configured base URL and timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.weather_base_url,
            Duration::from_secs(config.upstream_timeout),
        )
    }

    /// Full URL of the lookup endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl UpstreamClient for HttpUpstream {
    async fn lookup(&self, raw_key: &str) -> Result<Option<WeatherInfo>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("location", raw_key)])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        // A literal `null` body also decodes to None.
        Ok(serde_json::from_slice(&body)?)
    }
}
