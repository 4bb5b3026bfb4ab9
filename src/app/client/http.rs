//! Core HTTP operations
//!
//! One request per call: no retries, no rate limiting. A non-success
//! status is reported as an error before the body is read.

use reqwest::Client;
use url::Url;

use crate::errors::{FetchError, FetchResult};

/// HTTP operations handler
#[derive(Debug, Clone)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    /// Creates a new HttpHandler with the given client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and decodes the body as JSON
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request cannot complete, the server
    /// answers with a non-2xx status, or the body is not JSON
    pub async fn get_json(&self, url: &Url) -> FetchResult<serde_json::Value> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!("{} responded with {}", url, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Get a reference to the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
