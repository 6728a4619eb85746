//! HTTP registry client.
//!
//! Fetches packuments from an npm-compatible registry. Each request carries
//! its own timeout; there is no retry.

use anyhow::{anyhow, Context};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use url::Url;

use crate::error::{Result, StaleguardError};

use super::metadata::{parse_metadata, RegistryMetadata};
use super::source::MetadataSource;

/// Public npm registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Per-request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Looks up package metadata over HTTP/HTTPS.
#[derive(Debug)]
pub struct RegistryClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl RegistryClient {
    /// Create a client for the given registry base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid registry URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Registry URL cannot have path segments: {}", base_url).into());
        }

        let client = Client::builder()
            .user_agent(concat!("staleguard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Client for the public npm registry with the default timeout.
    pub fn npm() -> Result<Self> {
        Self::new(DEFAULT_REGISTRY_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the registry base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a package document, with the name encoded as one path segment.
    ///
    /// Scoped names keep their `@` and have the `/` encoded, so
    /// `@types/node` becomes `.../@types%2Fnode`.
    pub fn package_url(&self, package: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(package);
        }
        url
    }
}

impl MetadataSource for RegistryClient {
    fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata> {
        let url = self.package_url(package);
        tracing::debug!("Fetching registry metadata: {}", url);

        let unavailable = |message: String| StaleguardError::RegistryUnavailable {
            package: package.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP {}", status)));
        }

        let body = response.text().map_err(|e| unavailable(e.to_string()))?;
        parse_metadata(package, &body)
    }
}
