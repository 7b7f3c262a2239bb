//! HTTP client for the beer pricing feed.

use std::path::Path;
use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, FeedError, Result};
use crate::ingest::{ingest, FeedSchema, Ingested};

/// Published location of the feed.
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/gangerang/alculator-data/master/beer_corrected.json";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client that downloads the feed document.
///
/// The client performs exactly one request per call and never retries.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http_client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl FeedClient {
    /// Creates a client for the published feed with default settings.
    pub fn new() -> Result<Self> {
        FeedClientBuilder::new().build()
    }

    /// Creates a client for a custom feed URL.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        FeedClientBuilder::new().url(url).build()
    }

    /// Returns a builder for custom configuration.
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::new()
    }

    /// Returns the feed URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Downloads the feed and decodes it as JSON without interpreting it.
    pub async fn fetch_raw(&self) -> Result<Value> {
        tracing::debug!(url = %self.url, "fetching feed");

        let response = self.http_client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                message
            };
            return Err(FeedError::Http {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Downloads the feed and ingests it with the given schema.
    pub async fn fetch(&self, schema: FeedSchema) -> Result<Ingested> {
        let document = self.fetch_raw().await?;
        let ingested = ingest(document, schema);
        tracing::info!(
            url = %self.url,
            products = ingested.products.len(),
            dropped = ingested.dropped,
            "feed downloaded"
        );
        Ok(ingested)
    }
}

/// Reads a feed document from disk and ingests it.
pub async fn load_file(path: impl AsRef<Path>, schema: FeedSchema) -> Result<Ingested> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let document: Value = serde_json::from_str(&contents)?;
    Ok(ingest(document, schema))
}

/// Builder for [`FeedClient`].
#[derive(Debug, Clone)]
pub struct FeedClientBuilder {
    url: String,
    timeout: Duration,
}

impl Default for FeedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClientBuilder {
    /// Creates a builder with the published URL and default timeout.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the feed URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<FeedClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("alculator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(FeedClient {
            http_client,
            url: self.url,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
