use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::errors::{SourceError, SourceResult};
use crate::utils::url::UrlUtils;

/// Thin reqwest wrapper that maps transport failures onto [`SourceError`]
/// and keeps credentials out of every error message.
#[derive(Clone)]
pub struct StandardHttpClient {
    client: Client,
}

impl StandardHttpClient {
    /// Create new HTTP client with a total request timeout
    pub fn with_timeout(timeout: Duration) -> SourceResult<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(concat!("reel-portfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Request {
                url: String::new(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }

    /// Fetch URL and decode the body as JSON
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> SourceResult<T> {
        let safe_url = UrlUtils::obfuscate_credentials(url);
        debug!("Fetching JSON content from: {}", safe_url);

        let response = self.client.get(url).send().await.map_err(|e| SourceError::Request {
            url: safe_url.clone(),
            message: UrlUtils::obfuscate_credentials(&e.to_string()),
        })?;

        let response = Self::ensure_success(response, &safe_url)?;

        let body = response.bytes().await.map_err(|e| SourceError::Request {
            url: safe_url.clone(),
            message: format!("Failed to read response: {}", UrlUtils::obfuscate_credentials(&e.to_string())),
        })?;

        debug!("Fetched {} bytes from {}", body.len(), safe_url);

        serde_json::from_slice(&body)
            .map_err(|e| SourceError::parse("http_client", format!("Invalid JSON from {safe_url}: {e}")))
    }

    fn ensure_success(response: Response, safe_url: &str) -> SourceResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(SourceError::Http {
            status: status.as_u16(),
            message: format!(
                "{} - URL: {}",
                status.canonical_reason().unwrap_or("Unknown"),
                safe_url
            ),
        })
    }
}
