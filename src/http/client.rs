//! GET-only HTTP client

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Blocking-style GET fetcher over a shared reqwest client
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with default timeout and user agent
    pub fn new() -> Self {
        Self::with_settings(
            Duration::from_secs(30),
            &format!("placefinder/{}", env!("CARGO_PKG_VERSION")),
        )
    }

    /// Create a client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_settings(config.timeout, &config.user_agent)
    }

    /// Create a client with an explicit timeout and user agent
    pub fn with_settings(timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Fetch a URL and return the response body as text
    ///
    /// Non-2xx responses become [`Error::HttpStatus`] carrying the status
    /// code and whatever body the server sent.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        debug!("GET {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Request succeeded: GET {url}");
        Ok(response.text().await?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}
